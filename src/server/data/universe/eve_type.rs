use entity::eve_type::{CATEGORY_STARBASE, CATEGORY_STRUCTURE};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::data::universe::{contains_pattern, SEARCH_LIMIT};

pub struct EveTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EveTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, type_id: i32) -> Result<Option<entity::eve_type::Model>, DbErr> {
        entity::prelude::EveType::find_by_id(type_id)
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::eve_type::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::EveType::find()
            .filter(entity::eve_type::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Starbase and structure types whose name contains `term`, ignoring case
    pub async fn search_structure_types(
        &self,
        term: &str,
    ) -> Result<Vec<entity::eve_type::Model>, DbErr> {
        entity::prelude::EveType::find()
            .filter(
                entity::eve_type::Column::CategoryId.is_in([CATEGORY_STARBASE, CATEGORY_STRUCTURE]),
            )
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::eve_type::Entity,
                    entity::eve_type::Column::Name,
                ))))
                .like(contains_pattern(term)),
            )
            .order_by_asc(entity::eve_type::Column::Name)
            .limit(SEARCH_LIMIT)
            .all(self.db)
            .await
    }
}
