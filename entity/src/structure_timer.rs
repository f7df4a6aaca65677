use sea_orm::entity::prelude::*;

/// Category of the in-game event a timer tracks
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum TimerType {
    #[sea_orm(string_value = "NO")]
    None,
    #[sea_orm(string_value = "AR")]
    Armor,
    #[sea_orm(string_value = "HL")]
    Hull,
    #[sea_orm(string_value = "AN")]
    Anchoring,
    #[sea_orm(string_value = "UA")]
    Unanchoring,
    #[sea_orm(string_value = "MM")]
    MoonMining,
}

impl TimerType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Armor => "Armor",
            Self::Hull => "Hull",
            Self::Anchoring => "Anchoring",
            Self::Unanchoring => "Unanchoring",
            Self::MoonMining => "Moon Mining",
        }
    }

    /// Bootstrap label class suffix used when rendering this timer type
    pub fn label_type(&self) -> &'static str {
        match self {
            Self::None => "default",
            Self::Armor | Self::Hull => "danger",
            Self::Anchoring | Self::Unanchoring => "warning",
            Self::MoonMining => "success",
        }
    }
}

/// Whether the structure belongs to an enemy, a friend or neither
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum TimerObjective {
    #[sea_orm(string_value = "UN")]
    Undefined,
    #[sea_orm(string_value = "HO")]
    Hostile,
    #[sea_orm(string_value = "FR")]
    Friendly,
    #[sea_orm(string_value = "NE")]
    Neutral,
}

impl TimerObjective {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Hostile => "Hostile",
            Self::Friendly => "Friendly",
            Self::Neutral => "Neutral",
        }
    }

    /// Bootstrap label class suffix used when rendering this objective
    pub fn label_type(&self) -> &'static str {
        match self {
            Self::Friendly => "primary",
            Self::Hostile => "danger",
            Self::Neutral => "info",
            Self::Undefined => "default",
        }
    }
}

/// Audience a timer is restricted to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum TimerVisibility {
    #[sea_orm(string_value = "UN")]
    Unrestricted,
    #[sea_orm(string_value = "AL")]
    Alliance,
    #[sea_orm(string_value = "CO")]
    Corporation,
}

impl TimerVisibility {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Unrestricted => "Unrestricted",
            Self::Alliance => "Alliance only",
            Self::Corporation => "Corporation only",
        }
    }
}

/// A scheduled in-game structure event.
///
/// The creator columns (`eve_character_id`, `eve_corporation_id`, `eve_alliance_id`
/// and `user_id`) are captured when the timer is created and detached to `NULL`
/// when the referenced record is deleted, the timer itself is kept.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "structure_timer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub timer_type: TimerType,
    pub eve_solar_system_id: i32,
    pub location_details: String,
    pub structure_type_id: i32,
    pub structure_name: String,
    pub objective: TimerObjective,
    pub date: DateTime,
    pub is_important: bool,
    pub owner_name: Option<String>,
    pub is_opsec: bool,
    pub eve_character_id: Option<i32>,
    pub eve_corporation_id: Option<i32>,
    pub eve_alliance_id: Option<i32>,
    pub visibility: TimerVisibility,
    pub user_id: Option<i32>,
    pub details_image_url: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub details_notes: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_solar_system::Entity",
        from = "Column::EveSolarSystemId",
        to = "super::eve_solar_system::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    EveSolarSystem,
    #[sea_orm(
        belongs_to = "super::eve_type::Entity",
        from = "Column::StructureTypeId",
        to = "super::eve_type::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    EveType,
    #[sea_orm(
        belongs_to = "super::eve_character::Entity",
        from = "Column::EveCharacterId",
        to = "super::eve_character::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    EveCharacter,
    #[sea_orm(
        belongs_to = "super::eve_corporation::Entity",
        from = "Column::EveCorporationId",
        to = "super::eve_corporation::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    EveCorporation,
    #[sea_orm(
        belongs_to = "super::eve_alliance::Entity",
        from = "Column::EveAllianceId",
        to = "super::eve_alliance::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    EveAlliance,
    #[sea_orm(
        belongs_to = "super::auth_user::Entity",
        from = "Column::UserId",
        to = "super::auth_user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    AuthUser,
}

impl Related<super::eve_solar_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveSolarSystem.def()
    }
}

impl Related<super::eve_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveType.def()
    }
}

impl Related<super::eve_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCharacter.def()
    }
}

impl Related<super::eve_corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCorporation.def()
    }
}

impl Related<super::eve_alliance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveAlliance.def()
    }
}

impl Related<super::auth_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
