//! HTTP route handlers.

pub mod events;
pub mod guestbook;
pub mod site;

use crate::error::ApiError;

/// Reject absent or empty required fields with a message naming the
/// field.
fn required(value: Option<String>, message: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::Validation(message.into())),
    }
}
