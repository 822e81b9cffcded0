//! SurrealDB implementation of [`GuestbookRepository`].
//!
//! Entries are append-only; the listing returns newest first, matching
//! the message-wall display order.

use chrono::{DateTime, Utc};
use modutree_core::error::ModuTreeResult;
use modutree_core::models::guestbook::{CreateGuestbookEntry, GuestbookEntry};
use modutree_core::repository::GuestbookRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct EntryRow {
    site_id: String,
    name: String,
    message: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct EntryRowWithId {
    record_id: String,
    site_id: String,
    name: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl EntryRow {
    fn into_entry(self, id: Uuid) -> GuestbookEntry {
        GuestbookEntry {
            id,
            site_id: self.site_id,
            name: self.name,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

impl EntryRowWithId {
    fn try_into_entry(self) -> Result<GuestbookEntry, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Migration(format!("invalid UUID: {e}")))?;
        Ok(GuestbookEntry {
            id,
            site_id: self.site_id,
            name: self.name,
            message: self.message,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the Guestbook repository.
#[derive(Clone)]
pub struct SurrealGuestbookRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealGuestbookRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> GuestbookRepository for SurrealGuestbookRepository<C> {
    async fn create(&self, input: CreateGuestbookEntry) -> ModuTreeResult<GuestbookEntry> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('guestbook_entry', $id) SET \
                 site_id = $site_id, \
                 name = $name, \
                 message = $message",
            )
            .bind(("id", id_str.clone()))
            .bind(("site_id", input.site_id))
            .bind(("name", input.name))
            .bind(("message", input.message))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<EntryRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "guestbook_entry".into(),
            id: id_str,
        })?;

        Ok(row.into_entry(id))
    }

    async fn list_by_site(&self, site_id: &str) -> ModuTreeResult<Vec<GuestbookEntry>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM guestbook_entry \
                 WHERE site_id = $site_id \
                 ORDER BY created_at DESC",
            )
            .bind(("site_id", site_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EntryRowWithId> = result.take(0).map_err(DbError::from)?;
        let entries = rows
            .into_iter()
            .map(EntryRowWithId::try_into_entry)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}
