//! Slug registry error types.
//!
//! Display strings are the user-facing Korean messages shown verbatim
//! by the web UI, so they double as API error bodies.

use modutree_core::error::ModuTreeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    /// Slug contains characters outside `[a-z0-9-]`.
    #[error("영문 소문자, 숫자, 하이픈만 사용할 수 있습니다.")]
    InvalidCharset,

    /// Slug is shorter than 3 or longer than 20 characters.
    #[error("URL 주소는 3자 이상 20자 이하여야 합니다.")]
    InvalidLength,

    /// Slug is already claimed by an existing site.
    #[error("이미 사용 중인 URL 주소입니다.")]
    Taken,
}

impl From<SlugError> for ModuTreeError {
    fn from(err: SlugError) -> Self {
        match err {
            SlugError::InvalidCharset | SlugError::InvalidLength => ModuTreeError::Validation {
                message: err.to_string(),
            },
            SlugError::Taken => ModuTreeError::AlreadyExists {
                entity: "site".into(),
            },
        }
    }
}
