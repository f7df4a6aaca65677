use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{permission::PermissionRepository, user::UserRepository},
    error::Error,
    model::{permission::Permission, viewer::Viewer},
};

pub struct ViewerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ViewerService<'a> {
    /// Creates a new instance of [`ViewerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the user, their main character and their permissions of this app.
    ///
    /// # Returns
    /// - `Ok(Some(Viewer))` - User exists
    /// - `Ok(None)` - No user with this ID
    /// - `Err(Error)` - Database error
    pub async fn get_viewer(&self, user_id: i32) -> Result<Option<Viewer>, Error> {
        let Some((user, main_character)) = UserRepository::new(self.db).get(user_id).await? else {
            return Ok(None);
        };

        let permissions: HashSet<Permission> = PermissionRepository::new(self.db)
            .get_user_permissions(user.id)
            .await?
            .iter()
            .filter_map(|p| Permission::parse(p))
            .collect();

        Ok(Some(Viewer {
            user_id: user.id,
            main_character,
            permissions,
        }))
    }
}
