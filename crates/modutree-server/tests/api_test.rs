//! End-to-end API tests: the real router over in-memory SurrealDB.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use modutree_server::state::AppState;
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tower::util::ServiceExt;

/// Helper: in-memory DB, migrations, full router.
async fn test_app() -> Router {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    modutree_db::run_migrations(&db).await.unwrap();
    modutree_server::router(AppState::new(db))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn site_payload(slug: &str) -> Value {
    json!({
        "name": "Test",
        "template": "calendar",
        "slug": slug,
    })
}

// -----------------------------------------------------------------------
// Slug registry
// -----------------------------------------------------------------------

#[tokio::test]
async fn check_slug_reports_availability() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/site/check-slug?slug=fresh-slug")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "available": true }));

    let (status, _) = send(&app, json_request("POST", "/api/site", site_payload("fresh-slug"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get("/api/site/check-slug?slug=fresh-slug")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "available": false }));
}

#[tokio::test]
async fn check_slug_fails_closed_on_bad_format() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/site/check-slug?slug=Bad_Slug")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], json!(false));
    assert_eq!(
        body["error"],
        json!("영문 소문자, 숫자, 하이픈만 사용할 수 있습니다.")
    );

    let (status, body) = send(&app, get("/api/site/check-slug?slug=ab")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], json!(false));
    assert_eq!(body["error"], json!("URL 주소는 3자 이상 20자 이하여야 합니다."));
}

#[tokio::test]
async fn check_slug_requires_param() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/site/check-slug")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Slug is required" }));
}

#[tokio::test]
async fn register_slug_accepts_free_and_rejects_taken() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/api/site/check-slug", json!({ "slug": "new-slug" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    send(&app, json_request("POST", "/api/site", site_payload("new-slug"))).await;

    let (status, body) = send(
        &app,
        json_request("POST", "/api/site/check-slug", json!({ "slug": "new-slug" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "이미 사용 중인 URL 주소입니다." }));
}

// -----------------------------------------------------------------------
// Sites
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_site_returns_stored_record() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/api/site", site_payload("test-site")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_string(), "id must be assigned: {body}");
    assert!(body["createdAt"].is_string(), "createdAt must be set");
    assert_eq!(body["name"], json!("Test"));
    assert_eq!(body["slug"], json!("test-site"));
    assert_eq!(body["template"], json!("calendar"));
    // Optional fields default to empty strings.
    assert_eq!(body["description"], json!(""));
    assert_eq!(body["profileImage"], json!(""));
}

#[tokio::test]
async fn create_site_rejects_short_slug() {
    let app = test_app().await;

    let (status, body) = send(&app, json_request("POST", "/api/site", site_payload("ab"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "URL 주소는 3자 이상 20자 이하여야 합니다." }));
}

#[tokio::test]
async fn create_site_names_missing_fields() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/site",
            json!({ "template": "calendar", "slug": "no-name" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name is required" }));

    let (status, body) = send(
        &app,
        json_request("POST", "/api/site", json!({ "name": "X", "slug": "no-tpl" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Template is required" }));

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/site",
            json!({ "name": "X", "template": "wiki", "slug": "bad-tpl" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Template must be 'guestbook' or 'calendar'" })
    );
}

#[tokio::test]
async fn create_site_conflicts_on_duplicate_slug() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        json_request("POST", "/api/site", site_payload("test-site")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        json_request("POST", "/api/site", site_payload("test-site")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "이미 사용 중인 URL 주소입니다." }));
}

#[tokio::test]
async fn get_site_by_id_and_slug() {
    let app = test_app().await;

    let (_, created) = send(
        &app,
        json_request("POST", "/api/site", site_payload("lookup-site")),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, by_id) = send(&app, get(&format!("/api/site?id={id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id, created);

    let (status, by_slug) = send(&app, get("/api/site?slug=lookup-site")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug, created);
}

#[tokio::test]
async fn get_site_unknown_is_404() {
    let app = test_app().await;

    for uri in [
        "/api/site?id=not-a-uuid",
        "/api/site?id=3b2c51a7-55a8-4b6e-b31e-52a5e1bcd5c1",
        "/api/site?slug=ghost-site",
    ] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "error": "Site not found" }));
    }
}

#[tokio::test]
async fn get_site_requires_id_or_slug() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/site")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "ID or slug is required" }));
}

#[tokio::test]
async fn list_sites_by_username() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/sites?username=nobody")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    send(&app, json_request("POST", "/api/site", site_payload("my-page"))).await;

    let (status, body) = send(&app, get("/api/sites?username=my-page")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["slug"], json!("my-page"));

    let (status, body) = send(&app, get("/api/sites")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Username is required" }));
}

// -----------------------------------------------------------------------
// Events
// -----------------------------------------------------------------------

#[tokio::test]
async fn events_require_site_id() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/events")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Site ID is required" }));
}

#[tokio::test]
async fn events_unknown_site_lists_empty() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/events?siteId=missing-id")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn created_event_round_trips_verbatim() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/events?siteId=site-1",
            json!({
                "date": "2024-03-25T14:00:00+09:00",
                "title": "3월 정기 모임",
                "description": "오후 2시, 커뮤니티 센터",
                "isNotice": true,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["siteId"], json!("site-1"));
    assert_eq!(created["date"], json!("2024-03-25T14:00:00+09:00"));
    assert_eq!(created["title"], json!("3월 정기 모임"));
    assert_eq!(created["isNotice"], json!(true));
    assert!(created["createdAt"].is_string());

    let (status, listed) = send(&app, get("/api/events?siteId=site-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn create_event_defaults_is_notice_false() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/events?siteId=site-1",
            json!({ "date": "2024-04-01T00:00:00Z", "title": "모임" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["isNotice"], json!(false));
    assert_eq!(created["description"], json!(""));
}

#[tokio::test]
async fn create_event_requires_title_and_date() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/events?siteId=site-1",
            json!({ "date": "2024-04-01T00:00:00Z" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Title is required" }));

    let (status, body) = send(
        &app,
        json_request("POST", "/api/events?siteId=site-1", json!({ "title": "모임" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Date is required" }));
}

#[tokio::test]
async fn delete_event_removes_and_404s_on_unknown() {
    let app = test_app().await;

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/api/events?siteId=site-1",
            json!({ "date": "2024-04-01T00:00:00Z", "title": "삭제 예정" }),
        ),
    )
    .await;
    let id = created["id"].clone();

    let (status, body) = send(
        &app,
        json_request("DELETE", "/api/events?siteId=site-1", json!({ "id": id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, listed) = send(&app, get("/api/events?siteId=site-1")).await;
    assert_eq!(listed, json!([]));

    // Deleting again is NotFound, not success.
    let (status, body) = send(
        &app,
        json_request("DELETE", "/api/events?siteId=site-1", json!({ "id": id })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Event not found" }));

    let (status, body) = send(
        &app,
        json_request("DELETE", "/api/events?siteId=site-1", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "ID is required" }));
}

// -----------------------------------------------------------------------
// Guestbook
// -----------------------------------------------------------------------

#[tokio::test]
async fn guestbook_create_and_list() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/guestbook?siteId=site-1",
            json!({ "name": "민수", "message": "축하해요!" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], json!("민수"));
    assert_eq!(created["message"], json!("축하해요!"));
    assert!(created["createdAt"].is_string());

    let (status, listed) = send(&app, get("/api/guestbook?siteId=site-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));

    let (status, body) = send(&app, get("/api/guestbook?siteId=missing-id")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn guestbook_requires_name_and_message() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/api/guestbook?siteId=site-1", json!({ "name": "민수" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Message is required" }));

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/guestbook?siteId=site-1",
            json!({ "message": "안녕하세요" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name is required" }));
}

#[tokio::test]
async fn guestbook_has_no_delete_route() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        json_request("DELETE", "/api/guestbook?siteId=site-1", json!({ "id": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
