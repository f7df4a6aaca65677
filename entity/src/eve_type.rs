use sea_orm::entity::prelude::*;

/// EVE Online inventory category of control towers and other starbase modules.
pub const CATEGORY_STARBASE: i32 = 23;
/// EVE Online inventory category of Upwell structures.
pub const CATEGORY_STRUCTURE: i32 = 65;

/// An item type from the universe catalog, keyed by its EVE Online type ID.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub group_id: i32,
    pub category_id: i32,
}

impl Model {
    /// Whether timers may be logged against this type
    pub fn is_structure(&self) -> bool {
        self.category_id == CATEGORY_STARBASE || self.category_id == CATEGORY_STRUCTURE
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
