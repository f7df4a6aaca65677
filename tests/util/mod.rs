//! Helpers shared by the integration tests.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use structuretimers::server::model::{permission::Permission, session::user::SessionUserId};
use structuretimers_test_utils::{TestContext, TestError};

/// Insert a user with a mock main character, grant `permissions` and put the user in
/// the test session.
pub async fn log_in(
    test: &TestContext,
    character_id: i64,
    corporation_id: i64,
    alliance_id: Option<i64>,
    permissions: &[Permission],
) -> Result<(entity::auth_user::Model, entity::eve_character::Model), TestError> {
    let (user, character) = test
        .user()
        .insert_user_with_mock_character(character_id, corporation_id, alliance_id)
        .await?;

    for permission in permissions {
        test.user()
            .grant_permission(user.id, permission.as_str())
            .await?;
    }

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    Ok((user, character))
}

pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
