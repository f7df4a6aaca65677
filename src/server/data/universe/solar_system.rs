use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::data::universe::{contains_pattern, SEARCH_LIMIT};

pub struct SolarSystemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SolarSystemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        solar_system_id: i32,
    ) -> Result<Option<entity::eve_solar_system::Model>, DbErr> {
        entity::prelude::EveSolarSystem::find_by_id(solar_system_id)
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::eve_solar_system::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::EveSolarSystem::find()
            .filter(entity::eve_solar_system::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Solar systems whose name contains `term`, ignoring case, ordered by name
    pub async fn search_by_name(
        &self,
        term: &str,
    ) -> Result<Vec<entity::eve_solar_system::Model>, DbErr> {
        entity::prelude::EveSolarSystem::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::eve_solar_system::Entity,
                    entity::eve_solar_system::Column::Name,
                ))))
                .like(contains_pattern(term)),
            )
            .order_by_asc(entity::eve_solar_system::Column::Name)
            .limit(SEARCH_LIMIT)
            .all(self.db)
            .await
    }
}
