//! Domain models for ModuTree.
//!
//! These are the core types shared across all crates. All wire-facing
//! structs serialize as camelCase to match the public JSON API.

pub mod event;
pub mod guestbook;
pub mod site;
