use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn universe<'a>(&'a self) -> UniverseFixtures<'a> {
        UniverseFixtures { setup: self }
    }
}

pub struct UniverseFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UniverseFixtures<'a> {
    pub async fn insert_solar_system(
        &self,
        solar_system_id: i32,
        name: &str,
    ) -> Result<entity::eve_solar_system::Model, TestError> {
        Ok(
            entity::prelude::EveSolarSystem::insert(entity::eve_solar_system::ActiveModel {
                id: ActiveValue::Set(solar_system_id),
                name: ActiveValue::Set(name.to_string()),
                security_status: ActiveValue::Set(0.5),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_eve_type(
        &self,
        type_id: i32,
        name: &str,
        group_id: i32,
        category_id: i32,
    ) -> Result<entity::eve_type::Model, TestError> {
        Ok(
            entity::prelude::EveType::insert(entity::eve_type::ActiveModel {
                id: ActiveValue::Set(type_id),
                name: ActiveValue::Set(name.to_string()),
                group_id: ActiveValue::Set(group_id),
                category_id: ActiveValue::Set(category_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
