use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        timer::{TimerDetailDto, TimerListItemDto},
    },
    server::{
        controller::util::get_user::get_viewer_from_session,
        error::{timer::TimerError, Error},
        model::{app::AppState, permission::Permission, timer::TimerTab},
        service::{timer::TimerService, universe::UniverseService},
        view::{render, TimerListTemplate},
    },
};

pub static TIMER_TAG: &str = "timer";

/// Timer board page with the current and past tabs
///
/// The tables are filled client-side from `/timers/list_data/{tab_name}`.
///
/// # Responses
/// - 200 (Success): Rendered timer board
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): User lacks basic access
pub async fn timer_list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;
    let staging_system = UniverseService::new(&state.db)
        .get_main_staging_system()
        .await?;

    render(&TimerListTemplate {
        can_create: viewer.has_permission(Permission::CreateTimer),
        staging_system,
    })
}

/// Timers of one tab of the board visible to the logged in user
#[utoipa::path(
    get,
    path = "/timers/list_data/{tab_name}",
    tag = TIMER_TAG,
    params(
        ("tab_name" = String, Path, description = "Either `current` or `past`")
    ),
    responses(
        (status = 200, description = "Timers of the tab in display order", body = Vec<TimerListItemDto>),
        (status = 401, description = "No user in session", body = ErrorDto),
        (status = 403, description = "User lacks basic access", body = ErrorDto),
        (status = 404, description = "Unknown tab", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn timer_list_data(
    State(state): State<AppState>,
    session: Session,
    Path(tab_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;
    let tab = TimerTab::parse(&tab_name).ok_or(TimerError::UnknownTab(tab_name))?;

    let timers = TimerService::new(&state.db)
        .list_timers(&viewer, tab, Utc::now().naive_utc())
        .await?;

    Ok(Json(timers))
}

/// Details of a single timer for the details dialog
#[utoipa::path(
    get,
    path = "/timers/get_timer_data/{timer_id}",
    tag = TIMER_TAG,
    params(
        ("timer_id" = i32, Path, description = "ID of the timer")
    ),
    responses(
        (status = 200, description = "Timer details", body = TimerDetailDto),
        (status = 401, description = "No user in session", body = ErrorDto),
        (status = 403, description = "User lacks basic access", body = ErrorDto),
        (status = 404, description = "Timer does not exist or is hidden from the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timer_data(
    State(state): State<AppState>,
    session: Session,
    Path(timer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;

    let timer = TimerService::new(&state.db)
        .get_timer_details(&viewer, timer_id)
        .await?;

    Ok(Json(timer))
}
