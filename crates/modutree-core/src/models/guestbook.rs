//! Guestbook entry domain model (guestbook template sub-resource).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single message on a site's guestbook wall.
///
/// Entries are append-only: there is no update or delete operation
/// anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestbookEntry {
    pub id: Uuid,
    pub site_id: String,
    /// Display name of the person signing the guestbook.
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a new guestbook entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestbookEntry {
    pub site_id: String,
    pub name: String,
    pub message: String,
}
