use axum::{extract::State, http::StatusCode, response::IntoResponse};
use structuretimers::server::{
    controller::timer::timer_list, data::universe::staging_system::StagingSystemRepository,
};

use super::*;

/// Expect the board with the create button and the main staging system
#[tokio::test]
async fn renders_board_with_staging_system() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_timer_tables()
        .with_default_catalog()
        .build()
        .await?;
    log_in(&test, 1, 10, None, MEMBER).await?;
    StagingSystemRepository::new(&test.db)
        .create("Home", Some(SYSTEM_AMAMAKE_ID), true)
        .await?;

    let result = timer_list(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Home (Amamake)"));
    assert!(html.contains("/timers/add"));

    Ok(())
}

/// Expect no create button for users without `create_timer`
#[tokio::test]
async fn hides_create_button_without_permission() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_timer_tables()
        .with_default_catalog()
        .build()
        .await?;
    log_in(&test, 1, 10, None, &[Permission::BasicAccess]).await?;

    let result = timer_list(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(!html.contains("/timers/add"));

    Ok(())
}

/// Expect 401 when no user is logged in
#[tokio::test]
async fn unauthorized_without_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_timer_tables().build().await?;

    let result = timer_list(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
