//! Slug availability service.

use modutree_core::error::ModuTreeResult;
use modutree_core::repository::SiteRepository;

use crate::error::SlugError;
use crate::validate::validate_slug;

/// Result of an availability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub available: bool,
    /// Set when the slug fails format validation; the store is not
    /// consulted in that case.
    pub reason: Option<String>,
}

/// Slug registry service.
///
/// Generic over the site repository so that this crate has no
/// dependency on the database crate.
pub struct SlugRegistry<R: SiteRepository> {
    sites: R,
}

impl<R: SiteRepository> SlugRegistry<R> {
    pub fn new(sites: R) -> Self {
        Self { sites }
    }

    /// Check whether a slug can be claimed. Fails closed on format
    /// violations without querying the store; otherwise availability is
    /// the emptiness of the matching site set. This is a pure read and
    /// reserves nothing.
    pub async fn check_availability(&self, slug: &str) -> ModuTreeResult<Availability> {
        if let Err(err) = validate_slug(slug) {
            return Ok(Availability {
                available: false,
                reason: Some(err.to_string()),
            });
        }

        let available = self.sites.slug_available(slug).await?;
        Ok(Availability {
            available,
            reason: None,
        })
    }

    /// Validate format and reject a slug that is already claimed.
    ///
    /// Note this is advisory: the authoritative claim happens inside
    /// `SiteRepository::create`, which is atomic with the slug's unique
    /// index. A slug free here can still lose a concurrent race there.
    pub async fn ensure_claimable(&self, slug: &str) -> ModuTreeResult<()> {
        validate_slug(slug)?;
        if self.sites.slug_available(slug).await? {
            Ok(())
        } else {
            Err(SlugError::Taken.into())
        }
    }
}
