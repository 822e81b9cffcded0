//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async and backed by the document store
//! as the sole source of truth; implementations must not hold any
//! authoritative in-process state.

use uuid::Uuid;

use crate::error::ModuTreeResult;
use crate::models::{
    event::{CreateEvent, Event},
    guestbook::{CreateGuestbookEntry, GuestbookEntry},
    site::{CreateSite, Site},
};

/// Site records keyed by store-assigned id and globally unique slug.
///
/// `create` must be atomic with the slug claim: two concurrent creates
/// with the same slug yield exactly one success and one
/// `AlreadyExists`. There are no update or delete operations.
pub trait SiteRepository: Send + Sync {
    fn create(&self, input: CreateSite) -> impl Future<Output = ModuTreeResult<Site>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = ModuTreeResult<Site>> + Send;
    /// Lookup by slug. Should a duplicate ever exist in the store, the
    /// earliest-created record wins.
    fn get_by_slug(&self, slug: &str) -> impl Future<Output = ModuTreeResult<Site>> + Send;
    /// All sites claimed under the given slug-as-username identifier.
    /// Returns an empty vec (not an error) when none match.
    fn list_by_slug(&self, slug: &str) -> impl Future<Output = ModuTreeResult<Vec<Site>>> + Send;
    /// Pure read used by the slug registry; never reserves anything.
    fn slug_available(&self, slug: &str) -> impl Future<Output = ModuTreeResult<bool>> + Send;
}

/// Events scoped by `site_id`. The site id is an equality filter only;
/// it is never validated against site existence.
pub trait EventRepository: Send + Sync {
    fn create(&self, input: CreateEvent) -> impl Future<Output = ModuTreeResult<Event>> + Send;
    fn list_by_site(
        &self,
        site_id: &str,
    ) -> impl Future<Output = ModuTreeResult<Vec<Event>>> + Send;
    /// Removes by id alone; deleting an unknown id is `NotFound`.
    fn delete(&self, id: Uuid) -> impl Future<Output = ModuTreeResult<()>> + Send;
}

/// Guestbook entries scoped by `site_id`. Append-only: no delete or
/// update operation exists.
pub trait GuestbookRepository: Send + Sync {
    fn create(
        &self,
        input: CreateGuestbookEntry,
    ) -> impl Future<Output = ModuTreeResult<GuestbookEntry>> + Send;
    fn list_by_site(
        &self,
        site_id: &str,
    ) -> impl Future<Output = ModuTreeResult<Vec<GuestbookEntry>>> + Send;
}
