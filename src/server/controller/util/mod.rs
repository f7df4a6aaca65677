//! Helpers shared by controllers: resolving the session's viewer and form CSRF tokens.

pub mod csrf;
pub mod get_user;
