//! Event route handlers (calendar template).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use modutree_core::models::event::{CreateEvent, Event};
use modutree_core::repository::EventRepository;
use serde::Deserialize;
use serde_json::{Value, json};
use surrealdb::Connection;
use uuid::Uuid;

use super::required;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteScope {
    site_id: Option<String>,
}

/// `GET /api/events?siteId=<id>`
///
/// An unknown site id yields `[]`, never an error; the foreign key is
/// not validated against site existence.
pub async fn list_events<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<SiteScope>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let site_id = required(params.site_id, "Site ID is required")?;

    Ok(Json(state.events.list_by_site(&site_id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventPayload {
    date: Option<String>,
    title: Option<String>,
    description: Option<String>,
    is_notice: Option<bool>,
}

/// `POST /api/events?siteId=<id>`
pub async fn create_event<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<SiteScope>,
    Json(payload): Json<CreateEventPayload>,
) -> Result<Json<Event>, ApiError> {
    let site_id = required(params.site_id, "Site ID is required")?;
    let date = required(payload.date, "Date is required")?;
    let title = required(payload.title, "Title is required")?;

    let event = state
        .events
        .create(CreateEvent {
            site_id,
            date,
            title,
            description: payload.description.unwrap_or_default(),
            is_notice: payload.is_notice.unwrap_or(false),
        })
        .await?;

    Ok(Json(event))
}

#[derive(Debug, Deserialize)]
pub struct DeleteEventPayload {
    id: Option<String>,
}

/// `DELETE /api/events?siteId=<id>` body `{id}`
///
/// Deletion is by id alone; the `siteId` parameter is accepted for
/// route symmetry but not cross-checked against the event.
pub async fn delete_event<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Json(payload): Json<DeleteEventPayload>,
) -> Result<Json<Value>, ApiError> {
    let id = required(payload.id, "ID is required")?;
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("Event not found".into()))?;

    state.events.delete(id).await?;
    Ok(Json(json!({ "success": true })))
}
