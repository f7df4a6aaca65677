use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct StagingSystemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StagingSystemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        eve_solar_system_id: Option<i32>,
        is_main: bool,
    ) -> Result<entity::staging_system::Model, DbErr> {
        let staging_system = entity::staging_system::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            eve_solar_system_id: ActiveValue::Set(eve_solar_system_id),
            is_main: ActiveValue::Set(is_main),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        staging_system.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::staging_system::Model>, DbErr> {
        entity::prelude::StagingSystem::find()
            .order_by_asc(entity::staging_system::Column::Name)
            .all(self.db)
            .await
    }

    /// The main staging system together with its solar system, if one is set
    pub async fn get_main(
        &self,
    ) -> Result<
        Option<(
            entity::staging_system::Model,
            Option<entity::eve_solar_system::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::StagingSystem::find()
            .filter(entity::staging_system::Column::IsMain.eq(true))
            .order_by_asc(entity::staging_system::Column::Id)
            .find_also_related(entity::eve_solar_system::Entity)
            .one(self.db)
            .await
    }
}
