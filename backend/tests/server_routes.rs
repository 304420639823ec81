//! Route wiring checks against the application assembled by `build_app`.

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{test as actix_test, web};
use rstest::rstest;
use serde_json::Value;
use users_api::domain::{IdPolicy, TRACE_ID_HEADER};
use users_api::inbound::http::health::HealthState;
use users_api::inbound::http::state::HttpState;
use users_api::outbound::memory::InMemoryUserStore;

#[expect(
    dead_code,
    reason = "server module include exposes bootstrap items unused in this test"
)]
#[path = "../src/server/mod.rs"]
mod server;

use server::{AppDependencies, build_app};

fn deps(ready: bool) -> AppDependencies {
    let health_state = web::Data::new(HealthState::new());
    if ready {
        health_state.mark_ready();
    }
    let store = Arc::new(InMemoryUserStore::seeded(IdPolicy::Sequence));
    AppDependencies {
        health_state,
        http_state: web::Data::new(HttpState::from_store(store)),
    }
}

#[actix_web::test]
async fn root_serves_landing_page() {
    let app = actix_test::init_service(build_app(deps(true))).await;
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .expect("content type");
    assert!(content_type.starts_with("text/html"));
    let body = actix_test::read_body(res).await;
    let html = std::str::from_utf8(&body).expect("utf-8 page");
    assert!(html.contains("/api/users"));
    assert!(html.contains("/api-docs/"));
}

#[actix_web::test]
async fn openapi_document_lists_user_operations() {
    let app = actix_test::init_service(build_app(deps(true))).await;
    let doc: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/openapi.json").to_request(),
    )
    .await;

    let paths = doc.get("paths").and_then(Value::as_object).expect("paths");
    assert!(paths.contains_key("/api/users"));
    assert!(paths.contains_key("/api/users/{id}"));
    assert_eq!(
        doc.pointer("/info/title").and_then(Value::as_str),
        Some("Users CRUD API")
    );
}

#[actix_web::test]
async fn swagger_ui_is_mounted() {
    let app = actix_test::init_service(build_app(deps(true))).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api-docs/").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[rstest]
#[case("/", StatusCode::OK)]
#[case("/api/users", StatusCode::OK)]
#[case("/api/users/1", StatusCode::OK)]
#[case("/api/users/999", StatusCode::NOT_FOUND)]
#[case("/health/live", StatusCode::OK)]
#[actix_web::test]
async fn every_response_carries_a_trace_id(#[case] uri: &str, #[case] expected: StatusCode) {
    let app = actix_test::init_service(build_app(deps(true))).await;
    let res =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(res.status(), expected);
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("trace-id header");
    assert!(!trace_id.is_empty());
}

#[rstest]
#[case(true, StatusCode::OK)]
#[case(false, StatusCode::SERVICE_UNAVAILABLE)]
#[actix_web::test]
async fn readiness_follows_health_state(#[case] ready: bool, #[case] expected: StatusCode) {
    let app = actix_test::init_service(build_app(deps(ready))).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;

    assert_eq!(res.status(), expected);
}

#[actix_web::test]
async fn seed_user_is_listed() {
    let app = actix_test::init_service(build_app(deps(true))).await;
    let users: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/users").to_request(),
    )
    .await;

    assert_eq!(
        users,
        serde_json::json!([{
            "id": 1,
            "name": "Fernando Terceros",
            "username": "jci_terceros",
            "email": "jciterceros@domain.com"
        }])
    );
}
