//! SeaORM entities for the structure timer board.
//!
//! `structure_timer` and `staging_system` are owned by this service. The remaining
//! entities mirror records owned by the host platform (users, permissions, EVE
//! characters, corporations & alliances) and by the universe catalog (solar systems
//! and item types).

pub mod prelude;

pub mod auth_user;
pub mod auth_user_permission;
pub mod eve_alliance;
pub mod eve_character;
pub mod eve_corporation;
pub mod eve_solar_system;
pub mod eve_type;
pub mod staging_system;
pub mod structure_timer;
