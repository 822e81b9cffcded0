//! ModuTree Core — domain models, repository trait definitions, and the
//! shared error taxonomy.
//!
//! This crate has no knowledge of the database or the HTTP layer; it only
//! defines the contracts both of them implement or consume.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{ModuTreeError, ModuTreeResult};
