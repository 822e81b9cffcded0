//! Site domain model.
//!
//! A site is the top-level entity: a personal micro-site claimed under a
//! globally unique slug. Sites are immutable once created: there are no
//! update or delete operations in this system.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The sub-resource behavior a site exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Append-only message wall.
    Guestbook,
    /// Date-indexed events plus notices.
    Calendar,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Guestbook => "guestbook",
            Template::Calendar => "calendar",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guestbook" => Ok(Template::Guestbook),
            "calendar" => Ok(Template::Calendar),
            _ => Err(()),
        }
    }
}

/// A micro-site registered under a unique slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: Uuid,
    /// URL-safe unique identifier chosen by the user (e.g., `my-wedding`).
    pub slug: String,
    /// Human-readable site title.
    pub name: String,
    pub description: String,
    /// Data URI or URL of the profile image; empty when not set.
    pub profile_image: String,
    pub template: Template,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a new site.
///
/// Field presence and slug format are validated at the HTTP boundary;
/// by the time this struct exists the optional fields have already been
/// defaulted to empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSite {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub profile_image: String,
    pub template: Template,
}
