use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000004_eve_solar_system::EveSolarSystem;

static FK_STAGING_SYSTEM_EVE_SOLAR_SYSTEM_ID: &str = "fk-staging_system-eve_solar_system_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StagingSystem::Table)
                    .if_not_exists()
                    .col(pk_auto(StagingSystem::Id))
                    .col(string_uniq(StagingSystem::Name))
                    .col(integer_null(StagingSystem::EveSolarSystemId).unique_key())
                    .col(boolean(StagingSystem::IsMain).default(false))
                    .col(timestamp(StagingSystem::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STAGING_SYSTEM_EVE_SOLAR_SYSTEM_ID)
                    .from_tbl(StagingSystem::Table)
                    .from_col(StagingSystem::EveSolarSystemId)
                    .to_tbl(EveSolarSystem::Table)
                    .to_col(EveSolarSystem::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STAGING_SYSTEM_EVE_SOLAR_SYSTEM_ID)
                    .table(StagingSystem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StagingSystem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StagingSystem {
    Table,
    Id,
    Name,
    EveSolarSystemId,
    IsMain,
    CreatedAt,
}
