//! ModuTree Registry — slug format validation and availability checks.
//!
//! The registry owns the mapping from human-chosen slug to site
//! identity. Format rules are enforced here as pure functions; the
//! uniqueness claim itself is atomic with the site insert at the store
//! layer (unique index on `site.slug`), so this crate never performs a
//! separate reservation write.

pub mod error;
pub mod service;
pub mod validate;

pub use error::SlugError;
pub use service::{Availability, SlugRegistry};
pub use validate::validate_slug;
