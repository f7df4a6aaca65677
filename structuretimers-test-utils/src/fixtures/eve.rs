use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn eve<'a>(&'a self) -> EveFixtures<'a> {
        EveFixtures { setup: self }
    }
}

pub struct EveFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> EveFixtures<'a> {
    /// Insert an alliance, or return the existing row for `alliance_id`.
    pub async fn insert_mock_alliance(
        &self,
        alliance_id: i64,
    ) -> Result<entity::eve_alliance::Model, TestError> {
        if let Some(existing) = entity::prelude::EveAlliance::find()
            .filter(entity::eve_alliance::Column::AllianceId.eq(alliance_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(
            entity::prelude::EveAlliance::insert(entity::eve_alliance::ActiveModel {
                alliance_id: ActiveValue::Set(alliance_id),
                name: ActiveValue::Set(format!("Alliance {}", alliance_id)),
                ticker: ActiveValue::Set(format!("A{}", alliance_id % 10000)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a corporation, or return the existing row for `corporation_id`.
    pub async fn insert_mock_corporation(
        &self,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<entity::eve_corporation::Model, TestError> {
        if let Some(existing) = entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let alliance_model_id = match alliance_id {
            Some(alliance_id) => Some(self.insert_mock_alliance(alliance_id).await?.id),
            None => None,
        };

        Ok(
            entity::prelude::EveCorporation::insert(entity::eve_corporation::ActiveModel {
                corporation_id: ActiveValue::Set(corporation_id),
                alliance_id: ActiveValue::Set(alliance_model_id),
                name: ActiveValue::Set(format!("Corporation {}", corporation_id)),
                ticker: ActiveValue::Set(format!("C{}", corporation_id % 10000)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a character, creating its corporation and alliance if needed.
    pub async fn insert_mock_character(
        &self,
        character_id: i64,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<entity::eve_character::Model, TestError> {
        let corporation = self
            .insert_mock_corporation(corporation_id, alliance_id)
            .await?;
        let alliance_model_id = match alliance_id {
            Some(alliance_id) => Some(self.insert_mock_alliance(alliance_id).await?.id),
            None => None,
        };

        Ok(
            entity::prelude::EveCharacter::insert(entity::eve_character::ActiveModel {
                character_id: ActiveValue::Set(character_id),
                corporation_id: ActiveValue::Set(corporation.id),
                alliance_id: ActiveValue::Set(alliance_model_id),
                name: ActiveValue::Set(format!("Character {}", character_id)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
