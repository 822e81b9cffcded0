//! Guestbook route handlers. Entries are append-only: there is no
//! delete or update route.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use modutree_core::models::guestbook::{CreateGuestbookEntry, GuestbookEntry};
use modutree_core::repository::GuestbookRepository;
use serde::Deserialize;
use surrealdb::Connection;

use super::required;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteScope {
    site_id: Option<String>,
}

/// `GET /api/guestbook?siteId=<id>`
pub async fn list_entries<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<SiteScope>,
) -> Result<Json<Vec<GuestbookEntry>>, ApiError> {
    let site_id = required(params.site_id, "Site ID is required")?;

    Ok(Json(state.guestbook.list_by_site(&site_id).await?))
}

#[derive(Debug, Deserialize)]
pub struct CreateEntryPayload {
    name: Option<String>,
    message: Option<String>,
}

/// `POST /api/guestbook?siteId=<id>` body `{name, message}`
pub async fn create_entry<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<SiteScope>,
    Json(payload): Json<CreateEntryPayload>,
) -> Result<Json<GuestbookEntry>, ApiError> {
    let site_id = required(params.site_id, "Site ID is required")?;
    let name = required(payload.name, "Name is required")?;
    let message = required(payload.message, "Message is required")?;

    let entry = state
        .guestbook
        .create(CreateGuestbookEntry {
            site_id,
            name,
            message,
        })
        .await?;

    Ok(Json(entry))
}
