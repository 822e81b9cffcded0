//! SurrealDB repository implementations.

mod event;
mod guestbook;
mod site;

pub use event::SurrealEventRepository;
pub use guestbook::SurrealGuestbookRepository;
pub use site::SurrealSiteRepository;
