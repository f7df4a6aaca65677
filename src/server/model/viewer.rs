use std::collections::HashSet;

use crate::server::{
    error::auth::AuthError,
    model::{db::EveCharacterModel, permission::Permission, timer::TimerCreator},
};

/// The logged in user a request is made for.
///
/// Holds everything visibility and permission checks need: the user ID, the user's main
/// character (whose corporation and alliance scope restricted timers) and the granted
/// permissions of this app.
#[derive(Clone, Debug)]
pub struct Viewer {
    pub user_id: i32,
    pub main_character: Option<EveCharacterModel>,
    pub permissions: HashSet<Permission>,
}

impl Viewer {
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Returns [`AuthError::MissingPermission`] unless the viewer holds `permission`.
    pub fn require(&self, permission: Permission) -> Result<(), AuthError> {
        if self.has_permission(permission) {
            return Ok(());
        }

        Err(AuthError::MissingPermission {
            user_id: self.user_id,
            permission: permission.as_str(),
        })
    }

    /// Database ID of the main character's corporation
    pub fn corporation_id(&self) -> Option<i32> {
        self.main_character.as_ref().map(|c| c.corporation_id)
    }

    /// Database ID of the main character's alliance
    pub fn alliance_id(&self) -> Option<i32> {
        self.main_character.as_ref().and_then(|c| c.alliance_id)
    }

    /// Creator columns recorded on timers this viewer creates
    pub fn as_creator(&self) -> TimerCreator {
        TimerCreator {
            user_id: self.user_id,
            eve_character_id: self.main_character.as_ref().map(|c| c.id),
            eve_corporation_id: self.corporation_id(),
            eve_alliance_id: self.alliance_id(),
        }
    }
}
