use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use structuretimers::{
    model::universe::{Select2ResponseDto, Select2ResultDto},
    server::controller::universe::{select2_solar_systems, select2_structure_types, Select2Query},
};

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_timer_tables()
        .with_default_catalog()
        .build()
        .await?;
    log_in(&test, 1, 10, None, &[Permission::BasicAccess]).await?;

    Ok(test)
}

fn query(term: &str) -> Query<Select2Query> {
    Query(Select2Query {
        term: term.to_string(),
    })
}

/// Expect a case-insensitive substring match on solar system names
#[tokio::test]
async fn finds_solar_system_by_partial_name() -> Result<(), TestError> {
    let test = setup().await?;

    let result =
        select2_solar_systems(State(test.to_app_state()), test.session.clone(), query("aBu")).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Select2ResponseDto = body_json(resp).await;
    assert_eq!(
        body,
        Select2ResponseDto {
            results: vec![Select2ResultDto {
                id: SYSTEM_ABUNE_ID,
                text: SYSTEM_ABUNE_NAME.to_string(),
            }],
        }
    );

    Ok(())
}

/// Expect an empty result list for an empty term
#[tokio::test]
async fn returns_nothing_for_empty_term() -> Result<(), TestError> {
    let test = setup().await?;

    let result =
        select2_solar_systems(State(test.to_app_state()), test.session.clone(), query("")).await;

    let body: Select2ResponseDto = body_json(result.unwrap().into_response()).await;
    assert!(body.results.is_empty());

    Ok(())
}

/// Expect only structure types, never other items
#[tokio::test]
async fn finds_only_structure_types() -> Result<(), TestError> {
    let test = setup().await?;

    let result =
        select2_structure_types(State(test.to_app_state()), test.session.clone(), query("a")).await;

    let body: Select2ResponseDto = body_json(result.unwrap().into_response()).await;
    let names: Vec<String> = body.results.into_iter().map(|r| r.text).collect();
    assert_eq!(names, vec![TYPE_ASTRAHUS_NAME, TYPE_RAITARU_NAME]);

    Ok(())
}

/// Expect 401 when no user is logged in
#[tokio::test]
async fn unauthorized_without_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_timer_tables().build().await?;

    let result =
        select2_solar_systems(State(test.to_app_state()), test.session.clone(), query("abu")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
