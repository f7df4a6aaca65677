//! Requests through the full router with a memory-backed session layer.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use structuretimers::server::{model::app::AppState, router::routes};
use structuretimers_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::body_text;

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.to_app_state::<AppState>())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Expect every timer route to reject requests without a logged in user
#[tokio::test]
async fn timer_routes_require_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_timer_tables().build().await?;
    let app = app(&test);

    for uri in [
        "/timers/",
        "/timers/add",
        "/timers/edit/1",
        "/timers/remove/1",
        "/timers/list_data/current",
        "/timers/get_timer_data/1",
        "/timers/select2_solar_systems?term=abu",
        "/timers/select2_structure_types?term=astra",
    ] {
        let resp = get(app.clone(), uri).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }

    Ok(())
}

/// Expect the OpenAPI document to describe the JSON routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get(app(&test), "/api/docs/openapi.json").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("/timers/list_data/{tab_name}"));
    assert!(body.contains("/timers/select2_solar_systems"));

    Ok(())
}

/// Expect 404 for paths outside the board
#[tokio::test]
async fn unknown_path_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get(app(&test), "/timers/unknown/path").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
