//! Database-specific error types and conversions.

use modutree_core::error::ModuTreeError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    /// Unique index violation on `site.slug`: another site already
    /// claimed the slug, possibly in a concurrent request.
    #[error("Slug already taken: {slug}")]
    SlugTaken { slug: String },
}

impl From<DbError> for ModuTreeError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ModuTreeError::NotFound { entity, id },
            DbError::SlugTaken { .. } => ModuTreeError::AlreadyExists {
                entity: "site".into(),
            },
            other => ModuTreeError::Database(other.to_string()),
        }
    }
}
