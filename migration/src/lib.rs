pub use sea_orm_migration::prelude::*;

mod m20251018_000001_eve_alliance;
mod m20251018_000002_eve_corporation;
mod m20251018_000003_eve_character;
mod m20251018_000004_eve_solar_system;
mod m20251018_000005_eve_type;
mod m20251018_000006_auth_user;
mod m20251018_000007_auth_user_permission;
mod m20251018_000008_structure_timer;
mod m20251018_000009_staging_system;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_eve_alliance::Migration),
            Box::new(m20251018_000002_eve_corporation::Migration),
            Box::new(m20251018_000003_eve_character::Migration),
            Box::new(m20251018_000004_eve_solar_system::Migration),
            Box::new(m20251018_000005_eve_type::Migration),
            Box::new(m20251018_000006_auth_user::Migration),
            Box::new(m20251018_000007_auth_user_permission::Migration),
            Box::new(m20251018_000008_structure_timer::Migration),
            Box::new(m20251018_000009_staging_system::Migration),
        ]
    }
}
