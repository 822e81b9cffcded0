//! Site and slug-registry route handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use modutree_core::models::site::{CreateSite, Site, Template};
use modutree_core::repository::SiteRepository;
use modutree_registry::validate_slug;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use surrealdb::Connection;
use uuid::Uuid;

use super::required;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckSlugParams {
    slug: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckSlugResponse {
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// `GET /api/site/check-slug?slug=<s>`
///
/// Pure availability probe. Format violations fail closed without
/// touching the store.
pub async fn check_slug<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<CheckSlugParams>,
) -> Result<Json<CheckSlugResponse>, ApiError> {
    let slug = required(params.slug, "Slug is required")?;

    let availability = state.registry.check_availability(&slug).await?;
    Ok(Json(CheckSlugResponse {
        available: availability.available,
        error: availability.reason,
    }))
}

#[derive(Debug, Deserialize)]
pub struct RegisterSlugPayload {
    slug: Option<String>,
}

/// `POST /api/site/check-slug` body `{slug}`
///
/// Advisory pre-registration check used by the creation form. The
/// authoritative claim still happens inside site creation.
pub async fn register_slug<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Json(payload): Json<RegisterSlugPayload>,
) -> Result<Json<Value>, ApiError> {
    let slug = required(payload.slug, "Slug is required")?;

    state.registry.ensure_claimable(&slug).await?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
pub struct GetSiteParams {
    id: Option<String>,
    slug: Option<String>,
}

/// `GET /api/site?id=<id>` or `GET /api/site?slug=<s>`
pub async fn get_site<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<GetSiteParams>,
) -> Result<Json<Site>, ApiError> {
    if let Some(id) = params.id {
        // A malformed id cannot reference any site.
        let id =
            Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("Site not found".into()))?;
        return Ok(Json(state.sites.get_by_id(id).await?));
    }

    if let Some(slug) = params.slug {
        return Ok(Json(state.sites.get_by_slug(&slug).await?));
    }

    Err(ApiError::Validation("ID or slug is required".into()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSitePayload {
    name: Option<String>,
    description: Option<String>,
    profile_image: Option<String>,
    template: Option<String>,
    slug: Option<String>,
}

/// `POST /api/site`
///
/// Validates field presence and slug format, then inserts. The slug
/// claim is atomic with the insert; a lost race surfaces as the same
/// conflict error as a plainly taken slug.
pub async fn create_site<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Json(payload): Json<CreateSitePayload>,
) -> Result<Json<Site>, ApiError> {
    let name = required(payload.name, "Name is required")?;
    let template = required(payload.template, "Template is required")?;
    let slug = required(payload.slug, "Slug is required")?;

    let template: Template = template
        .parse()
        .map_err(|_| ApiError::Validation("Template must be 'guestbook' or 'calendar'".into()))?;
    validate_slug(&slug).map_err(|e| ApiError::Validation(e.to_string()))?;

    let site = state
        .sites
        .create(CreateSite {
            slug,
            name,
            description: payload.description.unwrap_or_default(),
            profile_image: payload.profile_image.unwrap_or_default(),
            template,
        })
        .await?;

    Ok(Json(site))
}

#[derive(Debug, Deserialize)]
pub struct ListSitesParams {
    username: Option<String>,
}

/// `GET /api/sites?username=<slug>`
///
/// Owner listing keyed by slug-as-username; an empty array is a valid
/// answer, not an error.
pub async fn list_sites<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<ListSitesParams>,
) -> Result<Json<Vec<Site>>, ApiError> {
    let username = required(params.username, "Username is required")?;

    Ok(Json(state.sites.list_by_slug(&username).await?))
}
