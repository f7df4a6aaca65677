use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use chrono::{TimeDelta, Utc};
use entity::structure_timer::TimerType;
use sea_orm::EntityTrait;
use structuretimers::server::controller::{
    timer_form::{edit_timer, edit_timer_page},
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

/// Insert a timer created by another user in corporation 10
async fn insert_foreign_timer(
    test: &TestContext,
) -> Result<entity::structure_timer::Model, TestError> {
    let (creator, character) = test
        .user()
        .insert_user_with_mock_character(99, 10, None)
        .await?;

    test.timer()
        .insert_timer(with_creator(
            mock_timer(Utc::now().naive_utc() + TimeDelta::hours(1)),
            &character,
            Some(creator.id),
        ))
        .await
}

/// Expect the form prefilled with the timer and its catalog selection
#[tokio::test]
async fn renders_prefilled_form_for_own_timer() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, character) = log_in(&test, 1, 10, None, MEMBER).await?;
    let timer = test
        .timer()
        .insert_timer(with_creator(
            mock_timer(Utc::now().naive_utc() + TimeDelta::hours(1)),
            &character,
            Some(user.id),
        ))
        .await?;

    let result = edit_timer_page(
        State(test.to_app_state()),
        test.session.clone(),
        Path(timer.id),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(&format!(r#"action="/timers/edit/{}""#, timer.id)));
    assert!(html.contains(SYSTEM_ABUNE_NAME));
    assert!(html.contains(TYPE_ASTRAHUS_NAME));

    Ok(())
}

/// Expect another user's timer to be updated by a manager, keeping its creator
#[tokio::test]
async fn manager_updates_foreign_timer() -> Result<(), TestError> {
    let test = setup().await?;
    let timer = insert_foreign_timer(&test).await?;
    log_in(
        &test,
        1,
        10,
        None,
        &[Permission::BasicAccess, Permission::ManageTimer],
    )
    .await?;
    let token = issue_csrf_token(&test.session).await.unwrap();

    let result = edit_timer(
        State(test.to_app_state()),
        test.session.clone(),
        Path(timer.id),
        Form(armor_timer_form(token)),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let updated = entity::prelude::StructureTimer::find_by_id(timer.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(updated.timer_type, TimerType::Armor);
    assert_eq!(updated.structure_name, "Big House");
    assert_eq!(updated.user_id, timer.user_id);
    assert_eq!(updated.eve_character_id, timer.eve_character_id);

    Ok(())
}

/// Expect 403 when editing another user's timer without `manage_timer`
#[tokio::test]
async fn forbidden_for_foreign_timer_without_manage_permission() -> Result<(), TestError> {
    let test = setup().await?;
    let timer = insert_foreign_timer(&test).await?;
    log_in(&test, 1, 10, None, MEMBER).await?;
    let token = issue_csrf_token(&test.session).await.unwrap();

    let result = edit_timer(
        State(test.to_app_state()),
        test.session.clone(),
        Path(timer.id),
        Form(armor_timer_form(token)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 when editing a timer that does not exist
#[tokio::test]
async fn not_found_for_unknown_timer() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, MEMBER).await?;

    let result = edit_timer_page(State(test.to_app_state()), test.session.clone(), Path(7)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the form again with the field error and the timer left unchanged
#[tokio::test]
async fn rerenders_form_with_errors() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, character) = log_in(&test, 1, 10, None, MEMBER).await?;
    let timer = test
        .timer()
        .insert_timer(with_creator(
            mock_timer(Utc::now().naive_utc() + TimeDelta::hours(1)),
            &character,
            Some(user.id),
        ))
        .await?;
    let token = issue_csrf_token(&test.session).await.unwrap();
    let form = TimerForm {
        date: "next tuesday".to_string(),
        ..armor_timer_form(token)
    };

    let result = edit_timer(
        State(test.to_app_state()),
        test.session.clone(),
        Path(timer.id),
        Form(form),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let html = body_text(resp).await;
    assert!(html.contains("Enter a valid date and time."));
    assert!(html.contains(&format!(r#"action="/timers/edit/{}""#, timer.id)));

    let unchanged = entity::prelude::StructureTimer::find_by_id(timer.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(unchanged, timer);

    Ok(())
}
