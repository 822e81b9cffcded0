//! Integration tests for the Event repository using in-memory SurrealDB.

use modutree_core::error::ModuTreeError;
use modutree_core::models::event::CreateEvent;
use modutree_core::repository::EventRepository;
use modutree_db::repository::SurrealEventRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

async fn setup() -> SurrealEventRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    modutree_db::run_migrations(&db).await.unwrap();
    SurrealEventRepository::new(db)
}

fn event_input(site_id: &str, date: &str, title: &str) -> CreateEvent {
    CreateEvent {
        site_id: site_id.into(),
        date: date.into(),
        title: title.into(),
        description: String::new(),
        is_notice: false,
    }
}

#[tokio::test]
async fn created_event_preserves_fields_verbatim() {
    let repo = setup().await;

    // The +09:00 offset must survive untouched: dates are stored as
    // given, with no timezone normalization.
    let event = repo
        .create(CreateEvent {
            site_id: "site-1".into(),
            date: "2024-03-25T14:00:00+09:00".into(),
            title: "3월 정기 모임".into(),
            description: "오후 2시, 커뮤니티 센터".into(),
            is_notice: true,
        })
        .await
        .unwrap();

    assert_eq!(event.site_id, "site-1");
    assert_eq!(event.date, "2024-03-25T14:00:00+09:00");
    assert_eq!(event.title, "3월 정기 모임");
    assert_eq!(event.description, "오후 2시, 커뮤니티 센터");
    assert!(event.is_notice);

    let listed = repo.list_by_site("site-1").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, event.id);
    assert_eq!(listed[0].date, "2024-03-25T14:00:00+09:00");
}

#[tokio::test]
async fn list_is_scoped_by_site_and_date_ordered() {
    let repo = setup().await;

    repo.create(event_input("site-a", "2024-03-28T00:00:00Z", "Later"))
        .await
        .unwrap();
    repo.create(event_input("site-a", "2024-03-25T00:00:00Z", "Earlier"))
        .await
        .unwrap();
    repo.create(event_input("site-b", "2024-03-26T00:00:00Z", "Other site"))
        .await
        .unwrap();

    let events = repo.list_by_site("site-a").await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Earlier");
    assert_eq!(events[1].title, "Later");
}

#[tokio::test]
async fn unknown_site_lists_empty() {
    let repo = setup().await;

    // `site_id` is never validated against site existence; an unknown
    // id is simply an empty result, not an error.
    let events = repo.list_by_site("missing-id").await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn delete_removes_event() {
    let repo = setup().await;

    let event = repo
        .create(event_input("site-a", "2024-04-01T00:00:00Z", "Doomed"))
        .await
        .unwrap();

    repo.delete(event.id).await.unwrap();

    let events = repo.list_by_site("site-a").await.unwrap();
    assert!(events.iter().all(|e| e.id != event.id));
}

#[tokio::test]
async fn delete_unknown_event_is_not_found() {
    let repo = setup().await;

    let result = repo.delete(Uuid::new_v4()).await;
    assert!(matches!(result, Err(ModuTreeError::NotFound { .. })));
}
