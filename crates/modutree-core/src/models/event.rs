//! Event domain model (calendar template sub-resource).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar entry belonging to a site.
///
/// `site_id` is a plain string and is never checked against site
/// existence; sub-resource writes are intentionally permissive.
/// `date` is stored exactly as submitted, with no timezone
/// normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub site_id: String,
    /// ISO-8601 timestamp, passed through verbatim from the client.
    pub date: String,
    pub title: String,
    pub description: String,
    /// Notices are surfaced in a separate announcements list.
    pub is_notice: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub site_id: String,
    pub date: String,
    pub title: String,
    pub description: String,
    pub is_notice: bool,
}
