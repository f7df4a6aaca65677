use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251018_000001_eve_alliance::EveAlliance, m20251018_000002_eve_corporation::EveCorporation,
    m20251018_000003_eve_character::EveCharacter,
    m20251018_000004_eve_solar_system::EveSolarSystem, m20251018_000005_eve_type::EveType,
    m20251018_000006_auth_user::AuthUser,
};

static IDX_STRUCTURE_TIMER_DATE: &str = "idx-structure_timer-date";
static IDX_STRUCTURE_TIMER_IS_OPSEC: &str = "idx-structure_timer-is_opsec";
static IDX_STRUCTURE_TIMER_VISIBILITY: &str = "idx-structure_timer-visibility";
static FK_STRUCTURE_TIMER_EVE_SOLAR_SYSTEM_ID: &str = "fk-structure_timer-eve_solar_system_id";
static FK_STRUCTURE_TIMER_STRUCTURE_TYPE_ID: &str = "fk-structure_timer-structure_type_id";
static FK_STRUCTURE_TIMER_EVE_CHARACTER_ID: &str = "fk-structure_timer-eve_character_id";
static FK_STRUCTURE_TIMER_EVE_CORPORATION_ID: &str = "fk-structure_timer-eve_corporation_id";
static FK_STRUCTURE_TIMER_EVE_ALLIANCE_ID: &str = "fk-structure_timer-eve_alliance_id";
static FK_STRUCTURE_TIMER_USER_ID: &str = "fk-structure_timer-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StructureTimer::Table)
                    .if_not_exists()
                    .col(pk_auto(StructureTimer::Id))
                    .col(string_len(StructureTimer::TimerType, 2).default("NO"))
                    .col(integer(StructureTimer::EveSolarSystemId))
                    .col(string_len(StructureTimer::LocationDetails, 254).default(""))
                    .col(integer(StructureTimer::StructureTypeId))
                    .col(string_len(StructureTimer::StructureName, 254).default(""))
                    .col(string_len(StructureTimer::Objective, 2).default("UN"))
                    .col(date_time(StructureTimer::Date))
                    .col(boolean(StructureTimer::IsImportant).default(false))
                    .col(string_len_null(StructureTimer::OwnerName, 254))
                    .col(boolean(StructureTimer::IsOpsec).default(false))
                    .col(integer_null(StructureTimer::EveCharacterId))
                    .col(integer_null(StructureTimer::EveCorporationId))
                    .col(integer_null(StructureTimer::EveAllianceId))
                    .col(string_len(StructureTimer::Visibility, 2).default("UN"))
                    .col(integer_null(StructureTimer::UserId))
                    .col(string_len_null(StructureTimer::DetailsImageUrl, 1024))
                    .col(text(StructureTimer::DetailsNotes).default(""))
                    .col(timestamp(StructureTimer::CreatedAt))
                    .col(timestamp(StructureTimer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_STRUCTURE_TIMER_DATE, StructureTimer::Date),
            (IDX_STRUCTURE_TIMER_IS_OPSEC, StructureTimer::IsOpsec),
            (IDX_STRUCTURE_TIMER_VISIBILITY, StructureTimer::Visibility),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(StructureTimer::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STRUCTURE_TIMER_EVE_SOLAR_SYSTEM_ID)
                    .from_tbl(StructureTimer::Table)
                    .from_col(StructureTimer::EveSolarSystemId)
                    .to_tbl(EveSolarSystem::Table)
                    .to_col(EveSolarSystem::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STRUCTURE_TIMER_STRUCTURE_TYPE_ID)
                    .from_tbl(StructureTimer::Table)
                    .from_col(StructureTimer::StructureTypeId)
                    .to_tbl(EveType::Table)
                    .to_col(EveType::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STRUCTURE_TIMER_EVE_CHARACTER_ID)
                    .from_tbl(StructureTimer::Table)
                    .from_col(StructureTimer::EveCharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STRUCTURE_TIMER_EVE_CORPORATION_ID)
                    .from_tbl(StructureTimer::Table)
                    .from_col(StructureTimer::EveCorporationId)
                    .to_tbl(EveCorporation::Table)
                    .to_col(EveCorporation::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STRUCTURE_TIMER_EVE_ALLIANCE_ID)
                    .from_tbl(StructureTimer::Table)
                    .from_col(StructureTimer::EveAllianceId)
                    .to_tbl(EveAlliance::Table)
                    .to_col(EveAlliance::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STRUCTURE_TIMER_USER_ID)
                    .from_tbl(StructureTimer::Table)
                    .from_col(StructureTimer::UserId)
                    .to_tbl(AuthUser::Table)
                    .to_col(AuthUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_STRUCTURE_TIMER_USER_ID,
            FK_STRUCTURE_TIMER_EVE_ALLIANCE_ID,
            FK_STRUCTURE_TIMER_EVE_CORPORATION_ID,
            FK_STRUCTURE_TIMER_EVE_CHARACTER_ID,
            FK_STRUCTURE_TIMER_STRUCTURE_TYPE_ID,
            FK_STRUCTURE_TIMER_EVE_SOLAR_SYSTEM_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(StructureTimer::Table)
                        .to_owned(),
                )
                .await?;
        }

        for name in [
            IDX_STRUCTURE_TIMER_VISIBILITY,
            IDX_STRUCTURE_TIMER_IS_OPSEC,
            IDX_STRUCTURE_TIMER_DATE,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(StructureTimer::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(StructureTimer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StructureTimer {
    Table,
    Id,
    TimerType,
    EveSolarSystemId,
    LocationDetails,
    StructureTypeId,
    StructureName,
    Objective,
    Date,
    IsImportant,
    OwnerName,
    IsOpsec,
    EveCharacterId,
    EveCorporationId,
    EveAllianceId,
    Visibility,
    UserId,
    DetailsImageUrl,
    DetailsNotes,
    CreatedAt,
    UpdatedAt,
}
