//! SurrealDB implementation of [`EventRepository`].
//!
//! `site_id` is an equality filter only; writes never check that the
//! referenced site exists. `date` is stored verbatim as submitted;
//! listing orders by it ascending for a stable calendar view.

use chrono::{DateTime, Utc};
use modutree_core::error::ModuTreeResult;
use modutree_core::models::event::{CreateEvent, Event};
use modutree_core::repository::EventRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct EventRow {
    site_id: String,
    date: String,
    title: String,
    description: String,
    is_notice: bool,
    created_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct EventRowWithId {
    record_id: String,
    site_id: String,
    date: String,
    title: String,
    description: String,
    is_notice: bool,
    created_at: DateTime<Utc>,
}

impl EventRow {
    fn into_event(self, id: Uuid) -> Event {
        Event {
            id,
            site_id: self.site_id,
            date: self.date,
            title: self.title,
            description: self.description,
            is_notice: self.is_notice,
            created_at: self.created_at,
        }
    }
}

impl EventRowWithId {
    fn try_into_event(self) -> Result<Event, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Migration(format!("invalid UUID: {e}")))?;
        Ok(Event {
            id,
            site_id: self.site_id,
            date: self.date,
            title: self.title,
            description: self.description,
            is_notice: self.is_notice,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the Event repository.
#[derive(Clone)]
pub struct SurrealEventRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealEventRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> EventRepository for SurrealEventRepository<C> {
    async fn create(&self, input: CreateEvent) -> ModuTreeResult<Event> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('event', $id) SET \
                 site_id = $site_id, \
                 date = $date, \
                 title = $title, \
                 description = $description, \
                 is_notice = $is_notice",
            )
            .bind(("id", id_str.clone()))
            .bind(("site_id", input.site_id))
            .bind(("date", input.date))
            .bind(("title", input.title))
            .bind(("description", input.description))
            .bind(("is_notice", input.is_notice))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<EventRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "event".into(),
            id: id_str,
        })?;

        Ok(row.into_event(id))
    }

    async fn list_by_site(&self, site_id: &str) -> ModuTreeResult<Vec<Event>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM event \
                 WHERE site_id = $site_id \
                 ORDER BY date ASC",
            )
            .bind(("site_id", site_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EventRowWithId> = result.take(0).map_err(DbError::from)?;
        let events = rows
            .into_iter()
            .map(EventRowWithId::try_into_event)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(events)
    }

    async fn delete(&self, id: Uuid) -> ModuTreeResult<()> {
        let id_str = id.to_string();

        // RETURN BEFORE yields the deleted row, which distinguishes a
        // real deletion from an unknown id.
        let mut result = self
            .db
            .query("DELETE type::record('event', $id) RETURN BEFORE")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EventRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "event".into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }
}
