use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, permission::Permission, session::user::SessionUserId, viewer::Viewer},
    service::viewer::ViewerService,
};

/// Resolve the logged in user of the session and require `basic_access`.
///
/// # Arguments
/// - `state`: Application state with the database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(Viewer)`: User found and allowed to use the timer board
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID in session but not in
///   the database (session is cleared)
/// - `Err(Error::AuthError(AuthError::MissingPermission))`: User lacks `basic_access`
/// - `Err(Error)`: Database or session errors
pub async fn get_viewer_from_session(state: &AppState, session: &Session) -> Result<Viewer, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(viewer) = ViewerService::new(&state.db).get_viewer(user_id).await? else {
        session.clear().await;

        tracing::warn!(
            "Failed to find user ID {} in database despite having an active session; \
            cleared session for user, they will need to log in again",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    viewer.require(Permission::BasicAccess)?;

    Ok(viewer)
}
