use sea_orm_migration::{prelude::*, schema::*};

static IDX_EVE_SOLAR_SYSTEM_NAME: &str = "idx-eve_solar_system-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveSolarSystem::Table)
                    .if_not_exists()
                    // Catalog IDs are EVE Online IDs, never generated here
                    .col(integer(EveSolarSystem::Id).primary_key())
                    .col(string(EveSolarSystem::Name))
                    .col(double(EveSolarSystem::SecurityStatus))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_SOLAR_SYSTEM_NAME)
                    .table(EveSolarSystem::Table)
                    .col(EveSolarSystem::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVE_SOLAR_SYSTEM_NAME)
                    .table(EveSolarSystem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EveSolarSystem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveSolarSystem {
    Table,
    Id,
    Name,
    SecurityStatus,
}
