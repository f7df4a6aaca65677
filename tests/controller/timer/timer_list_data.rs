use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{TimeDelta, Utc};
use entity::structure_timer::TimerVisibility;
use sea_orm::ActiveValue;
use structuretimers::{model::timer::TimerListItemDto, server::controller::timer::timer_list_data};

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_timer_tables()
        .with_default_catalog()
        .build()
        .await
}

async fn current_ids(test: &TestContext) -> Vec<i32> {
    let result = timer_list_data(
        State(test.to_app_state()),
        test.session.clone(),
        Path("current".to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let timers: Vec<TimerListItemDto> = body_json(resp).await;

    timers.into_iter().map(|t| t.id).collect()
}

/// Insert a future timer created by a user whose main is `character_id`.
async fn insert_timer_by(
    test: &TestContext,
    character_id: i64,
    corporation_id: i64,
    alliance_id: Option<i64>,
    visibility: TimerVisibility,
    is_opsec: bool,
) -> Result<entity::structure_timer::Model, TestError> {
    let (user, character) = test
        .user()
        .insert_user_with_mock_character(character_id, corporation_id, alliance_id)
        .await?;

    test.timer()
        .insert_timer(entity::structure_timer::ActiveModel {
            visibility: ActiveValue::Set(visibility),
            is_opsec: ActiveValue::Set(is_opsec),
            ..with_creator(
                mock_timer(Utc::now().naive_utc() + TimeDelta::hours(4)),
                &character,
                Some(user.id),
            )
        })
        .await
}

/// Expect future timers soonest first in the current tab
#[tokio::test]
async fn returns_current_timers_soonest_first() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, MEMBER).await?;
    let now = Utc::now().naive_utc();
    let later = test
        .timer()
        .insert_timer(mock_timer(now + TimeDelta::days(2)))
        .await?;
    let sooner = test
        .timer()
        .insert_timer(mock_timer(now + TimeDelta::hours(2)))
        .await?;
    test.timer()
        .insert_timer(mock_timer(now - TimeDelta::hours(2)))
        .await?;

    assert_eq!(current_ids(&test).await, vec![sooner.id, later.id]);

    Ok(())
}

/// Expect elapsed timers most recent first in the past tab
#[tokio::test]
async fn returns_past_timers_most_recent_first() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, MEMBER).await?;
    let now = Utc::now().naive_utc();
    let older = test
        .timer()
        .insert_timer(mock_timer(now - TimeDelta::days(2)))
        .await?;
    let recent = test
        .timer()
        .insert_timer(mock_timer(now - TimeDelta::hours(2)))
        .await?;
    test.timer()
        .insert_timer(mock_timer(now + TimeDelta::hours(2)))
        .await?;

    let result = timer_list_data(
        State(test.to_app_state()),
        test.session.clone(),
        Path("past".to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let timers: Vec<TimerListItemDto> = body_json(resp).await;
    let ids: Vec<i32> = timers.into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![recent.id, older.id]);

    Ok(())
}

/// Expect list rows to carry display names resolved from the catalog
#[tokio::test]
async fn returns_structure_display_name() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, MEMBER).await?;
    test.timer()
        .insert_timer(entity::structure_timer::ActiveModel {
            location_details: ActiveValue::Set("Planet 5".to_string()),
            ..mock_timer(Utc::now().naive_utc() + TimeDelta::hours(1))
        })
        .await?;

    let result = timer_list_data(
        State(test.to_app_state()),
        test.session.clone(),
        Path("current".to_string()),
    )
    .await;

    let timers: Vec<TimerListItemDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(timers.len(), 1);
    assert_eq!(
        timers[0].structure_display_name,
        format!("{} - Planet 5 ({})", SYSTEM_ABUNE_NAME, TYPE_ASTRAHUS_NAME)
    );

    Ok(())
}

/// Expect 404 for a tab other than current or past
#[tokio::test]
async fn not_found_for_unknown_tab() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, MEMBER).await?;

    let result = timer_list_data(
        State(test.to_app_state()),
        test.session.clone(),
        Path("future".to_string()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 when no user is logged in
#[tokio::test]
async fn unauthorized_without_user_in_session() -> Result<(), TestError> {
    let test = setup().await?;

    let result = timer_list_data(
        State(test.to_app_state()),
        test.session.clone(),
        Path("current".to_string()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 403 for a user without basic access
#[tokio::test]
async fn forbidden_without_basic_access() -> Result<(), TestError> {
    let test = setup().await?;
    log_in(&test, 1, 10, None, &[]).await?;

    let result = timer_list_data(
        State(test.to_app_state()),
        test.session.clone(),
        Path("current".to_string()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn shows_corporation_timer_to_corporation_member() -> Result<(), TestError> {
    let test = setup().await?;
    let timer = insert_timer_by(&test, 1, 10, None, TimerVisibility::Corporation, false).await?;
    log_in(&test, 2, 10, None, MEMBER).await?;

    assert_eq!(current_ids(&test).await, vec![timer.id]);

    Ok(())
}

#[tokio::test]
async fn hides_corporation_timer_from_other_corporation() -> Result<(), TestError> {
    let test = setup().await?;
    insert_timer_by(&test, 1, 10, Some(100), TimerVisibility::Corporation, false).await?;
    log_in(&test, 2, 11, Some(100), MEMBER).await?;

    assert!(current_ids(&test).await.is_empty());

    Ok(())
}

#[tokio::test]
async fn shows_alliance_timer_to_alliance_member() -> Result<(), TestError> {
    let test = setup().await?;
    let timer = insert_timer_by(&test, 1, 10, Some(100), TimerVisibility::Alliance, false).await?;
    log_in(&test, 2, 11, Some(100), MEMBER).await?;

    assert_eq!(current_ids(&test).await, vec![timer.id]);

    Ok(())
}

#[tokio::test]
async fn hides_alliance_timer_from_other_alliance() -> Result<(), TestError> {
    let test = setup().await?;
    insert_timer_by(&test, 1, 10, Some(100), TimerVisibility::Alliance, false).await?;
    log_in(&test, 2, 11, Some(101), MEMBER).await?;
    assert!(current_ids(&test).await.is_empty());

    Ok(())
}

/// Expect an alliance timer to stay hidden from a corporation without alliance
#[tokio::test]
async fn hides_alliance_timer_from_viewer_without_alliance() -> Result<(), TestError> {
    let test = setup().await?;
    insert_timer_by(&test, 1, 10, None, TimerVisibility::Alliance, false).await?;
    log_in(&test, 2, 10, None, MEMBER).await?;

    assert!(current_ids(&test).await.is_empty());

    Ok(())
}

#[tokio::test]
async fn hides_opsec_timer_without_permission() -> Result<(), TestError> {
    let test = setup().await?;
    insert_timer_by(&test, 1, 10, None, TimerVisibility::Unrestricted, true).await?;
    log_in(&test, 2, 10, None, MEMBER).await?;

    assert!(current_ids(&test).await.is_empty());

    Ok(())
}

#[tokio::test]
async fn shows_opsec_timer_with_permission() -> Result<(), TestError> {
    let test = setup().await?;
    let timer = insert_timer_by(&test, 1, 10, None, TimerVisibility::Unrestricted, true).await?;
    log_in(
        &test,
        2,
        11,
        None,
        &[Permission::BasicAccess, Permission::ViewOpsecTimer],
    )
    .await?;

    assert_eq!(current_ids(&test).await, vec![timer.id]);

    Ok(())
}

/// Expect the opsec permission not to lift a corporation restriction
#[tokio::test]
async fn hides_opsec_corporation_timer_from_other_corporation() -> Result<(), TestError> {
    let test = setup().await?;
    insert_timer_by(&test, 1, 10, None, TimerVisibility::Corporation, true).await?;
    log_in(
        &test,
        2,
        11,
        None,
        &[Permission::BasicAccess, Permission::ViewOpsecTimer],
    )
    .await?;

    assert!(current_ids(&test).await.is_empty());

    Ok(())
}

/// Expect creators to see their own timers whatever the restrictions
#[tokio::test]
async fn always_shows_own_timer() -> Result<(), TestError> {
    let test = setup().await?;
    let (user, character) = log_in(&test, 1, 10, None, MEMBER).await?;
    let timer = test
        .timer()
        .insert_timer(entity::structure_timer::ActiveModel {
            visibility: ActiveValue::Set(TimerVisibility::Alliance),
            is_opsec: ActiveValue::Set(true),
            ..with_creator(
                mock_timer(Utc::now().naive_utc() + TimeDelta::hours(1)),
                &character,
                Some(user.id),
            )
        })
        .await?;

    assert_eq!(current_ids(&test).await, vec![timer.id]);

    Ok(())
}

/// Expect only own timers to be modifiable for users without `manage_timer`
#[tokio::test]
async fn marks_only_own_timers_modifiable() -> Result<(), TestError> {
    let test = setup().await?;
    let other = insert_timer_by(&test, 1, 10, None, TimerVisibility::Unrestricted, false).await?;
    let (user, character) = log_in(&test, 2, 10, None, MEMBER).await?;
    let own = test
        .timer()
        .insert_timer(with_creator(
            mock_timer(Utc::now().naive_utc() + TimeDelta::hours(8)),
            &character,
            Some(user.id),
        ))
        .await?;

    let result = timer_list_data(
        State(test.to_app_state()),
        test.session.clone(),
        Path("current".to_string()),
    )
    .await;

    let timers: Vec<TimerListItemDto> = body_json(result.unwrap().into_response()).await;
    let modifiable: Vec<(i32, bool)> = timers.iter().map(|t| (t.id, t.can_modify)).collect();
    assert_eq!(modifiable, vec![(other.id, false), (own.id, true)]);

    Ok(())
}
