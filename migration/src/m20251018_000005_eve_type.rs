use sea_orm_migration::{prelude::*, schema::*};

static IDX_EVE_TYPE_CATEGORY_ID: &str = "idx-eve_type-category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveType::Table)
                    .if_not_exists()
                    .col(integer(EveType::Id).primary_key())
                    .col(string(EveType::Name))
                    .col(integer(EveType::GroupId))
                    .col(integer(EveType::CategoryId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_TYPE_CATEGORY_ID)
                    .table(EveType::Table)
                    .col(EveType::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVE_TYPE_CATEGORY_ID)
                    .table(EveType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EveType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveType {
    Table,
    Id,
    Name,
    GroupId,
    CategoryId,
}
