use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000006_auth_user::AuthUser;

static IDX_AUTH_USER_PERMISSION_USER_ID_PERMISSION: &str =
    "idx-auth_user_permission-user_id-permission";
static FK_AUTH_USER_PERMISSION_USER_ID: &str = "fk-auth_user_permission-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthUserPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthUserPermission::Id))
                    .col(integer(AuthUserPermission::UserId))
                    .col(string(AuthUserPermission::Permission))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUTH_USER_PERMISSION_USER_ID_PERMISSION)
                    .table(AuthUserPermission::Table)
                    .col(AuthUserPermission::UserId)
                    .col(AuthUserPermission::Permission)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AUTH_USER_PERMISSION_USER_ID)
                    .from_tbl(AuthUserPermission::Table)
                    .from_col(AuthUserPermission::UserId)
                    .to_tbl(AuthUser::Table)
                    .to_col(AuthUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AUTH_USER_PERMISSION_USER_ID)
                    .table(AuthUserPermission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUTH_USER_PERMISSION_USER_ID_PERMISSION)
                    .table(AuthUserPermission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuthUserPermission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthUserPermission {
    Table,
    Id,
    UserId,
    Permission,
}
