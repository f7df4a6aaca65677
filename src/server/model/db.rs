//! Database model type aliases.
//!
//! Short names for the `entity` crate models used throughout the server.

/// User account of the host platform, with an optional main character.
pub type UserModel = entity::auth_user::Model;

/// A permission string granted to a user.
pub type UserPermissionModel = entity::auth_user_permission::Model;

/// EVE Online character. `corporation_id` and `alliance_id` reference database rows,
/// not EVE IDs.
pub type EveCharacterModel = entity::eve_character::Model;

pub type EveSolarSystemModel = entity::eve_solar_system::Model;

pub type EveTypeModel = entity::eve_type::Model;

pub type StagingSystemModel = entity::staging_system::Model;

/// Structure timer row.
pub type TimerModel = entity::structure_timer::Model;
