pub use super::auth_user::Entity as AuthUser;
pub use super::auth_user_permission::Entity as AuthUserPermission;
pub use super::eve_alliance::Entity as EveAlliance;
pub use super::eve_character::Entity as EveCharacter;
pub use super::eve_corporation::Entity as EveCorporation;
pub use super::eve_solar_system::Entity as EveSolarSystem;
pub use super::eve_type::Entity as EveType;
pub use super::staging_system::Entity as StagingSystem;
pub use super::structure_timer::Entity as StructureTimer;
