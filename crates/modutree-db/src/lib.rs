//! ModuTree Database — SurrealDB connection management and repository
//! implementations.
//!
//! This crate provides:
//! - Connection management ([`DbConfig`], [`DbManager`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - Repository implementations for the `modutree-core` traits
//! - Error types ([`DbError`])
//!
//! The schema carries a unique index on `site.slug`, which makes slug
//! registration atomic with the site insert: concurrent creates with
//! the same slug cannot both succeed.

mod connection;
mod error;
mod schema;

pub mod repository;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::run_migrations;
