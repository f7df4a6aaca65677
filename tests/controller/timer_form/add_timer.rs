use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Form,
};
use entity::structure_timer::{TimerObjective, TimerType};
use sea_orm::{EntityTrait, PaginatorTrait};
use structuretimers::server::controller::{
    timer_form::{add_timer, add_timer_page},
    util::csrf::issue_csrf_token,
};

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_timer_tables()
        .with_default_catalog()
        .build()
        .await
}

/// Expect the empty form with a CSRF token
#[tokio::test]
async fn renders_empty_form() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, MEMBER).await?;

    let result = add_timer_page(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(r#"action="/timers/add""#));
    assert!(html.contains(r#"name="csrf_token""#));
    assert!(!html.contains(r#"name="is_opsec""#));

    Ok(())
}

/// Expect a created timer owned by the user and a redirect to the board
#[tokio::test]
async fn creates_timer_and_redirects() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, character) = log_in(&test, 1, 10, None, MEMBER).await?;
    let token = issue_csrf_token(&test.session).await.unwrap();

    let result = add_timer(
        State(test.to_app_state()),
        test.session.clone(),
        Form(armor_timer_form(token)),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/timers/");

    let timers = entity::prelude::StructureTimer::find().all(&test.db).await?;
    assert_eq!(timers.len(), 1);
    assert_eq!(timers[0].timer_type, TimerType::Armor);
    assert_eq!(timers[0].objective, TimerObjective::Hostile);
    assert_eq!(timers[0].user_id, Some(user.id));
    assert_eq!(timers[0].eve_character_id, Some(character.id));
    assert_eq!(timers[0].eve_corporation_id, Some(character.corporation_id));

    Ok(())
}

/// Expect the form again with the field error when a non-structure type is chosen
#[tokio::test]
async fn rerenders_form_for_non_structure_type() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, MEMBER).await?;
    let token = issue_csrf_token(&test.session).await.unwrap();
    let form = TimerForm {
        structure_type: TYPE_TRITANIUM_ID.to_string(),
        ..armor_timer_form(token)
    };

    let result = add_timer(State(test.to_app_state()), test.session.clone(), Form(form)).await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let html = body_text(resp).await;
    assert!(html.contains("This type is not a structure."));
    assert!(html.contains("Big House"));

    let count = entity::prelude::StructureTimer::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Expect 400 and no timer when the CSRF token does not match
#[tokio::test]
async fn rejects_mismatched_csrf_token() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, MEMBER).await?;
    issue_csrf_token(&test.session).await.unwrap();

    let result = add_timer(
        State(test.to_app_state()),
        test.session.clone(),
        Form(armor_timer_form("forged".to_string())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let count = entity::prelude::StructureTimer::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Expect 403 for users without `create_timer`
#[tokio::test]
async fn forbidden_without_create_permission() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, &[Permission::BasicAccess]).await?;
    let token = issue_csrf_token(&test.session).await.unwrap();

    let result = add_timer(
        State(test.to_app_state()),
        test.session.clone(),
        Form(armor_timer_form(token)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect opsec timers to be rejected for users who cannot see them
#[tokio::test]
async fn rejects_opsec_without_permission() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, MEMBER).await?;
    let token = issue_csrf_token(&test.session).await.unwrap();
    let form = TimerForm {
        is_opsec: Some("on".to_string()),
        ..armor_timer_form(token)
    };

    let result = add_timer(State(test.to_app_state()), test.session.clone(), Form(form)).await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let count = entity::prelude::StructureTimer::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}
