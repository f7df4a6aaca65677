//! Repositories for users of the host platform and their permissions.

pub mod permission;
pub mod user;
