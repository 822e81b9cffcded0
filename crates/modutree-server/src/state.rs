//! Shared request state: one repository per resource, plus the slug
//! registry, all over a single store connection.

use std::sync::Arc;

use modutree_db::repository::{
    SurrealEventRepository, SurrealGuestbookRepository, SurrealSiteRepository,
};
use modutree_registry::SlugRegistry;
use surrealdb::{Connection, Surreal};

pub struct AppState<C: Connection> {
    pub sites: SurrealSiteRepository<C>,
    pub events: SurrealEventRepository<C>,
    pub guestbook: SurrealGuestbookRepository<C>,
    pub registry: SlugRegistry<SurrealSiteRepository<C>>,
}

impl<C: Connection> AppState<C> {
    pub fn new(db: Surreal<C>) -> Arc<Self> {
        let sites = SurrealSiteRepository::new(db.clone());
        Arc::new(Self {
            registry: SlugRegistry::new(sites.clone()),
            events: SurrealEventRepository::new(db.clone()),
            guestbook: SurrealGuestbookRepository::new(db),
            sites,
        })
    }
}
