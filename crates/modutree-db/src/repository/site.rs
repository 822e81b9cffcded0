//! SurrealDB implementation of [`SiteRepository`].
//!
//! Slug uniqueness rides on the `idx_site_slug` UNIQUE index: the
//! insert and the slug claim are a single store operation, so two
//! concurrent creates with the same slug cannot both succeed. The
//! index-violation error is translated to [`DbError::SlugTaken`].

use chrono::{DateTime, Utc};
use modutree_core::error::ModuTreeResult;
use modutree_core::models::site::{CreateSite, Site, Template};
use modutree_core::repository::SiteRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct SiteRow {
    slug: String,
    name: String,
    description: String,
    profile_image: String,
    template: String,
    created_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct SiteRowWithId {
    record_id: String,
    slug: String,
    name: String,
    description: String,
    profile_image: String,
    template: String,
    created_at: DateTime<Utc>,
}

fn parse_template(s: &str) -> Result<Template, DbError> {
    s.parse()
        .map_err(|_| DbError::Migration(format!("unknown template: {s}")))
}

impl SiteRow {
    fn into_site(self, id: Uuid) -> Result<Site, DbError> {
        Ok(Site {
            id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            profile_image: self.profile_image,
            template: parse_template(&self.template)?,
            created_at: self.created_at,
        })
    }
}

impl SiteRowWithId {
    fn try_into_site(self) -> Result<Site, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Migration(format!("invalid UUID: {e}")))?;
        Ok(Site {
            id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            profile_image: self.profile_image,
            template: parse_template(&self.template)?,
            created_at: self.created_at,
        })
    }
}

/// Map a write error, detecting violations of the slug unique index.
fn map_write_err(slug: &str, err: surrealdb::Error) -> DbError {
    if err.to_string().contains("idx_site_slug") {
        DbError::SlugTaken { slug: slug.into() }
    } else {
        DbError::Surreal(err)
    }
}

/// SurrealDB implementation of the Site repository.
pub struct SurrealSiteRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> Clone for SurrealSiteRepository<C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

impl<C: Connection> SurrealSiteRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> SiteRepository for SurrealSiteRepository<C> {
    async fn create(&self, input: CreateSite) -> ModuTreeResult<Site> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let slug = input.slug.clone();

        let result = self
            .db
            .query(
                "CREATE type::record('site', $id) SET \
                 slug = $slug, \
                 name = $name, \
                 description = $description, \
                 profile_image = $profile_image, \
                 template = $template",
            )
            .bind(("id", id_str.clone()))
            .bind(("slug", input.slug))
            .bind(("name", input.name))
            .bind(("description", input.description))
            .bind(("profile_image", input.profile_image))
            .bind(("template", input.template.as_str()))
            .await
            .map_err(|e| map_write_err(&slug, e))?;

        let mut result = result.check().map_err(|e| map_write_err(&slug, e))?;

        let rows: Vec<SiteRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "site".into(),
            id: id_str,
        })?;

        Ok(row.into_site(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> ModuTreeResult<Site> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('site', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SiteRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "site".into(),
            id: id_str,
        })?;

        Ok(row.into_site(id)?)
    }

    async fn get_by_slug(&self, slug: &str) -> ModuTreeResult<Site> {
        // The unique index rules out duplicates; ORDER BY keeps the
        // result deterministic even if one ever slipped in.
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM site \
                 WHERE slug = $slug \
                 ORDER BY created_at ASC LIMIT 1",
            )
            .bind(("slug", slug.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SiteRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "site".into(),
            id: format!("slug={slug}"),
        })?;

        Ok(row.try_into_site()?)
    }

    async fn list_by_slug(&self, slug: &str) -> ModuTreeResult<Vec<Site>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM site \
                 WHERE slug = $slug \
                 ORDER BY created_at ASC",
            )
            .bind(("slug", slug.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SiteRowWithId> = result.take(0).map_err(DbError::from)?;
        let sites = rows
            .into_iter()
            .map(SiteRowWithId::try_into_site)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(sites)
    }

    async fn slug_available(&self, slug: &str) -> ModuTreeResult<bool> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM site WHERE slug = $slug LIMIT 1",
            )
            .bind(("slug", slug.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SiteRowWithId> = result.take(0).map_err(DbError::from)?;
        Ok(rows.is_empty())
    }
}
