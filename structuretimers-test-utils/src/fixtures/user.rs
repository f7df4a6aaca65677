use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        username: &str,
        main_character_id: Option<i32>,
    ) -> Result<entity::auth_user::Model, TestError> {
        Ok(
            entity::prelude::AuthUser::insert(entity::auth_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                main_character_id: ActiveValue::Set(main_character_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user whose main is the already inserted character `character_id`.
    pub async fn insert_user_for_character(
        &self,
        character_id: i64,
    ) -> Result<entity::auth_user::Model, TestError> {
        let character = entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("character {}", character_id))
            })?;

        self.insert_user(&format!("user_{}", character_id), Some(character.id))
            .await
    }

    /// Insert a mock character and a user with it as main.
    pub async fn insert_user_with_mock_character(
        &self,
        character_id: i64,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<(entity::auth_user::Model, entity::eve_character::Model), TestError> {
        let character = self
            .setup
            .eve()
            .insert_mock_character(character_id, corporation_id, alliance_id)
            .await?;
        let user = self
            .insert_user(&format!("user_{}", character_id), Some(character.id))
            .await?;

        Ok((user, character))
    }

    pub async fn grant_permission(
        &self,
        user_id: i32,
        permission: &str,
    ) -> Result<entity::auth_user_permission::Model, TestError> {
        Ok(entity::prelude::AuthUserPermission::insert(
            entity::auth_user_permission::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                permission: ActiveValue::Set(permission.to_string()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Look up the user created for `character_id` by the builder.
    pub async fn get_user_for_character(
        &self,
        character_id: i64,
    ) -> Result<entity::auth_user::Model, TestError> {
        let user = entity::prelude::AuthUser::find()
            .filter(entity::auth_user::Column::Username.eq(format!("user_{}", character_id)))
            .one(&self.setup.db)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!("user for character {}", character_id))
            })?;

        Ok(user)
    }
}
