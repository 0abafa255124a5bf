//! HTTP-level access tests against the full router
//!
//! Exercises bearer-token enforcement and the company-resolution errors
//! that only show up at the transport boundary.

mod helpers;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serial_test::serial;
use tower::ServiceExt;

use fairhub::models::user::UserRole;
use fairhub::{build_router, AppState, DatabaseService, ServiceFactory};

use helpers::database::TestDatabase;

struct ApiFixture {
    state: AppState,
    _db: TestDatabase,
    _storage: tempfile::TempDir,
}

async fn api_fixture() -> ApiFixture {
    let db = TestDatabase::new().await.expect("test database");
    db.cleanup().await.expect("cleanup");

    let storage = tempfile::tempdir().expect("tempdir");
    let settings = helpers::test_settings(storage.path());
    let services = ServiceFactory::new(settings.clone(), DatabaseService::new(db.pool.clone()));

    ApiFixture {
        state: AppState {
            services: Arc::new(services),
            settings: Arc::new(settings),
        },
        _db: db,
        _storage: storage,
    }
}

#[tokio::test]
#[serial]
async fn test_company_user_without_company_gets_not_found_on_join() {
    let f = api_fixture().await;

    let user = f
        .state
        .services
        .user_service
        .register("lone.owner@test.dev", "password123", "Lone Owner", UserRole::Company)
        .await
        .expect("register");
    let token = f
        .state
        .services
        .auth_service
        .issue_token(user.id, user.role)
        .expect("token");

    let request = Request::builder()
        .method("POST")
        .uri("/api/events/join-event")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"event_id": 1, "stand_number": "A-1"}"#))
        .expect("request");

    let response = build_router(f.state.clone())
        .oneshot(request)
        .await
        .expect("response");

    // The caller owns no company yet, which is a missing resource, not a
    // role failure
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_download_requires_bearer_token() {
    let f = api_fixture().await;

    let user = f
        .state
        .services
        .user_service
        .register("dl.user@test.dev", "password123", "Downloader", UserRole::JobSeeker)
        .await
        .expect("register");
    let token = f
        .state
        .services
        .auth_service
        .issue_token(user.id, user.role)
        .expect("token");

    let stored = f
        .state
        .services
        .blob_store
        .store(b"attached resume", "resume.txt", "text/plain")
        .await
        .expect("store blob");
    f.state
        .services
        .db
        .files
        .upsert(
            &stored.hash,
            &stored.original_name,
            &stored.mime_type,
            stored.size_bytes as i64,
            Some(user.id),
        )
        .await
        .expect("record file");

    let router = build_router(f.state.clone());

    // Without a token the download is rejected outright
    let anonymous = Request::builder()
        .uri(format!("/api/files/download/{}", stored.hash))
        .body(Body::empty())
        .expect("request");
    let response = router
        .clone()
        .oneshot(anonymous)
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // With a token the blob comes back intact
    let authorized = Request::builder()
        .uri(format!("/api/files/download/{}", stored.hash))
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .expect("request");
    let response = router.oneshot(authorized).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(&bytes[..], b"attached resume");
}
