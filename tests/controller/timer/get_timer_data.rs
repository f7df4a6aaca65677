use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{TimeDelta, Utc};
use entity::structure_timer::{TimerType, TimerVisibility};
use sea_orm::ActiveValue;
use structuretimers::{model::timer::TimerDetailDto, server::controller::timer::get_timer_data};

use super::*;

/// Expect the details of a visible timer
#[tokio::test]
async fn returns_details_of_visible_timer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_timer_tables()
        .with_default_catalog()
        .build()
        .await?;
    let (_, character) = log_in(&test, 1, 10, None, MEMBER).await?;
    let timer = test
        .timer()
        .insert_timer(entity::structure_timer::ActiveModel {
            timer_type: ActiveValue::Set(TimerType::Hull),
            details_notes: ActiveValue::Set("Bring friends".to_string()),
            ..with_creator(
                mock_timer(Utc::now().naive_utc() + TimeDelta::hours(1)),
                &character,
                None,
            )
        })
        .await?;

    let result = get_timer_data(
        State(test.to_app_state()),
        test.session.clone(),
        Path(timer.id),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let details: TimerDetailDto = body_json(resp).await;
    assert_eq!(details.id, timer.id);
    assert_eq!(
        details.display_name,
        format!("Hull timer for {} ({})", SYSTEM_ABUNE_NAME, TYPE_ASTRAHUS_NAME)
    );
    assert_eq!(details.solar_system_name, SYSTEM_ABUNE_NAME);
    assert_eq!(details.details_notes, "Bring friends");
    assert_eq!(details.creator_name, Some(character.name));

    Ok(())
}

/// Expect 404 for a timer hidden from the user
#[tokio::test]
async fn not_found_for_hidden_timer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_timer_tables()
        .with_default_catalog()
        .build()
        .await?;
    let (_, creator) = test
        .user()
        .insert_user_with_mock_character(1, 10, None)
        .await?;
    let timer = test
        .timer()
        .insert_timer(entity::structure_timer::ActiveModel {
            visibility: ActiveValue::Set(TimerVisibility::Corporation),
            ..with_creator(mock_timer(Utc::now().naive_utc()), &creator, None)
        })
        .await?;
    log_in(&test, 2, 11, None, MEMBER).await?;

    let result = get_timer_data(
        State(test.to_app_state()),
        test.session.clone(),
        Path(timer.id),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 for a timer that does not exist
#[tokio::test]
async fn not_found_for_unknown_timer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_timer_tables()
        .with_default_catalog()
        .build()
        .await?;
    log_in(&test, 1, 10, None, MEMBER).await?;

    let result = get_timer_data(State(test.to_app_state()), test.session.clone(), Path(42)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
