use sea_orm::entity::prelude::*;

/// A solar system an organization stages out of.
///
/// The solar system link is detached (set to `NULL`) when the catalog entry is removed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "staging_system")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub eve_solar_system_id: Option<i32>,
    pub is_main: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_solar_system::Entity",
        from = "Column::EveSolarSystemId",
        to = "super::eve_solar_system::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    EveSolarSystem,
}

impl Related<super::eve_solar_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveSolarSystem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
