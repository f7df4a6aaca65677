use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct PermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PermissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every permission string granted to the user, including those of other apps
    pub async fn get_user_permissions(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::AuthUserPermission::find()
            .select_only()
            .column(entity::auth_user_permission::Column::Permission)
            .filter(entity::auth_user_permission::Column::UserId.eq(user_id))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
