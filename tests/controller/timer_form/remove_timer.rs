use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Form,
};
use chrono::{TimeDelta, Utc};
use sea_orm::{ActiveValue, EntityTrait};
use structuretimers::server::{
    controller::{
        timer_form::{remove_timer, remove_timer_page},
        util::csrf::issue_csrf_token,
    },
    model::form::RemoveTimerForm,
};

use super::*;

async fn setup_with_own_timer() -> Result<(TestContext, entity::structure_timer::Model), TestError>
{
    let test = TestBuilder::new()
        .with_timer_tables()
        .with_default_catalog()
        .build()
        .await?;
    let (user, character) = log_in(&test, 1, 10, None, MEMBER).await?;
    let timer = test
        .timer()
        .insert_timer(with_creator(
            mock_timer(Utc::now().naive_utc() + TimeDelta::hours(1)),
            &character,
            Some(user.id),
        ))
        .await?;

    Ok((test, timer))
}

/// Expect the confirmation page naming the timer
#[tokio::test]
async fn renders_confirmation() -> Result<(), TestError> {
    let (test, timer) = setup_with_own_timer().await?;

    let result = remove_timer_page(
        State(test.to_app_state()),
        test.session.clone(),
        Path(timer.id),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(&format!(
        "None timer for {} ({})",
        SYSTEM_ABUNE_NAME, TYPE_ASTRAHUS_NAME
    )));

    Ok(())
}

/// Expect the timer to be deleted and the user redirected to the board
#[tokio::test]
async fn removes_own_timer() -> Result<(), TestError> {
    let (test, timer) = setup_with_own_timer().await?;
    let token = issue_csrf_token(&test.session).await.unwrap();

    let result = remove_timer(
        State(test.to_app_state()),
        test.session.clone(),
        Path(timer.id),
        Form(RemoveTimerForm { csrf_token: token }),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/timers/");
    let found = entity::prelude::StructureTimer::find_by_id(timer.id)
        .one(&test.db)
        .await?;
    assert!(found.is_none());

    Ok(())
}

/// Expect a used CSRF token to be rejected on a second submission
#[tokio::test]
async fn rejects_reused_csrf_token() -> Result<(), TestError> {
    let (test, timer) = setup_with_own_timer().await?;
    let token = issue_csrf_token(&test.session).await.unwrap();
    let other = test
        .timer()
        .insert_timer(entity::structure_timer::ActiveModel {
            user_id: ActiveValue::Set(timer.user_id),
            ..mock_timer(Utc::now().naive_utc())
        })
        .await?;

    remove_timer(
        State(test.to_app_state()),
        test.session.clone(),
        Path(timer.id),
        Form(RemoveTimerForm {
            csrf_token: token.clone(),
        }),
    )
    .await
    .unwrap();

    let result = remove_timer(
        State(test.to_app_state()),
        test.session.clone(),
        Path(other.id),
        Form(RemoveTimerForm { csrf_token: token }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 403 and the timer kept when removing another user's timer without
/// `manage_timer`
#[tokio::test]
async fn forbidden_for_foreign_timer_without_manage_permission() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_timer_tables()
        .with_default_catalog()
        .build()
        .await?;
    let (creator, character) = test
        .user()
        .insert_user_with_mock_character(99, 10, None)
        .await?;
    let timer = test
        .timer()
        .insert_timer(with_creator(
            mock_timer(Utc::now().naive_utc() + TimeDelta::hours(1)),
            &character,
            Some(creator.id),
        ))
        .await?;
    log_in(&test, 1, 10, None, MEMBER).await?;
    let token = issue_csrf_token(&test.session).await.unwrap();

    let result = remove_timer(
        State(test.to_app_state()),
        test.session.clone(),
        Path(timer.id),
        Form(RemoveTimerForm { csrf_token: token }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let found = entity::prelude::StructureTimer::find_by_id(timer.id)
        .one(&test.db)
        .await?;
    assert!(found.is_some());

    Ok(())
}
