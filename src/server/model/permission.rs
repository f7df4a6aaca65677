/// Permissions of the structure timer board, stored as strings in `auth_user_permission`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Required for every route
    BasicAccess,
    CreateTimer,
    /// Edit and remove timers created by other users
    ManageTimer,
    /// See opsec timers and mark timers as opsec
    ViewOpsecTimer,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Self::BasicAccess,
        Self::CreateTimer,
        Self::ManageTimer,
        Self::ViewOpsecTimer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicAccess => "structuretimers.basic_access",
            Self::CreateTimer => "structuretimers.create_timer",
            Self::ManageTimer => "structuretimers.manage_timer",
            Self::ViewOpsecTimer => "structuretimers.view_opsec_timer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}
