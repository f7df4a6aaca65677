use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::server::{
    controller::util::{
        csrf::{issue_csrf_token, validate_csrf},
        get_user::get_viewer_from_session,
    },
    error::{timer::TimerError, Error},
    model::{
        app::AppState,
        form::{FormErrors, RemoveTimerForm, TimerForm},
        permission::Permission,
        viewer::Viewer,
    },
    service::{timer::TimerService, universe::UniverseService},
    view::{render, FormAction, TimerFormTemplate, TimerRemoveTemplate},
};

/// Where every successful form submission redirects to
const TIMER_LIST_URL: &str = "/timers/";

/// Empty form for a new timer
///
/// # Responses
/// - 200 (Success): Rendered form
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): User lacks basic access or `create_timer`
pub async fn add_timer_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;
    viewer.require(Permission::CreateTimer)?;

    render_form(
        &state,
        &session,
        &viewer,
        FormAction::Add,
        TimerForm::default(),
        FormErrors::default(),
    )
    .await
}

/// Create a timer from the submitted form
///
/// # Responses
/// - 303 (See Other): Timer created, redirect to the timer board
/// - 400 (Bad Request): CSRF validation failed, or the form is re-rendered with field errors
/// - 401 (Unauthorized): No user in session
/// - 403 (Forbidden): User lacks basic access or `create_timer`
pub async fn add_timer(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<TimerForm>,
) -> Result<Response, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;
    viewer.require(Permission::CreateTimer)?;
    validate_csrf(&session, &form.csrf_token).await?;

    let result = TimerService::new(&state.db)
        .create_timer(&viewer, &form, Utc::now().naive_utc())
        .await;

    match result {
        Ok(_) => Ok(Redirect::to(TIMER_LIST_URL).into_response()),
        Err(Error::TimerError(TimerError::InvalidForm(errors))) => {
            render_invalid_form(&state, &session, &viewer, FormAction::Add, form, errors).await
        }
        Err(e) => Err(e),
    }
}

/// Form prefilled with an existing timer
///
/// # Responses
/// - 200 (Success): Rendered form
/// - 403 (Forbidden): Timer belongs to someone else and the user lacks `manage_timer`
/// - 404 (Not Found): Timer does not exist or is hidden from the user
pub async fn edit_timer_page(
    State(state): State<AppState>,
    session: Session,
    Path(timer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;
    let timer = TimerService::new(&state.db)
        .get_modifiable_timer(&viewer, timer_id)
        .await?;

    render_form(
        &state,
        &session,
        &viewer,
        FormAction::Edit(timer.id),
        TimerForm::from_timer(&timer),
        FormErrors::default(),
    )
    .await
}

/// Update a timer from the submitted form
///
/// # Responses
/// - 303 (See Other): Timer updated, redirect to the timer board
/// - 400 (Bad Request): CSRF validation failed, or the form is re-rendered with field errors
/// - 403 (Forbidden): Timer belongs to someone else and the user lacks `manage_timer`
/// - 404 (Not Found): Timer does not exist or is hidden from the user
pub async fn edit_timer(
    State(state): State<AppState>,
    session: Session,
    Path(timer_id): Path<i32>,
    Form(form): Form<TimerForm>,
) -> Result<Response, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;
    let timer_service = TimerService::new(&state.db);
    timer_service.get_modifiable_timer(&viewer, timer_id).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let result = timer_service
        .update_timer(&viewer, timer_id, &form, Utc::now().naive_utc())
        .await;

    match result {
        Ok(_) => Ok(Redirect::to(TIMER_LIST_URL).into_response()),
        Err(Error::TimerError(TimerError::InvalidForm(errors))) => {
            let action = FormAction::Edit(timer_id);
            render_invalid_form(&state, &session, &viewer, action, form, errors).await
        }
        Err(e) => Err(e),
    }
}

/// Confirmation page before removing a timer
///
/// # Responses
/// - 200 (Success): Rendered confirmation
/// - 403 (Forbidden): Timer belongs to someone else and the user lacks `manage_timer`
/// - 404 (Not Found): Timer does not exist or is hidden from the user
pub async fn remove_timer_page(
    State(state): State<AppState>,
    session: Session,
    Path(timer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;
    let timer_service = TimerService::new(&state.db);
    let timer = timer_service.get_modifiable_timer(&viewer, timer_id).await?;
    let display_name = timer_service.get_display_name(&timer).await?;
    let csrf_token = issue_csrf_token(&session).await?;

    render(&TimerRemoveTemplate {
        timer_id: timer.id,
        display_name,
        csrf_token,
    })
}

/// Remove a timer after confirmation
///
/// # Responses
/// - 303 (See Other): Timer removed, redirect to the timer board
/// - 400 (Bad Request): CSRF validation failed
/// - 403 (Forbidden): Timer belongs to someone else and the user lacks `manage_timer`
/// - 404 (Not Found): Timer does not exist or is hidden from the user
pub async fn remove_timer(
    State(state): State<AppState>,
    session: Session,
    Path(timer_id): Path<i32>,
    Form(form): Form<RemoveTimerForm>,
) -> Result<Response, Error> {
    let viewer = get_viewer_from_session(&state, &session).await?;
    let timer_service = TimerService::new(&state.db);
    timer_service.get_modifiable_timer(&viewer, timer_id).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    timer_service.delete_timer(&viewer, timer_id).await?;

    Ok(Redirect::to(TIMER_LIST_URL).into_response())
}

async fn render_form(
    state: &AppState,
    session: &Session,
    viewer: &Viewer,
    action: FormAction,
    form: TimerForm,
    errors: FormErrors,
) -> Result<Response, Error> {
    let csrf_token = issue_csrf_token(session).await?;
    let selection = UniverseService::new(&state.db)
        .get_form_selection(&form)
        .await?;

    let page = render(&TimerFormTemplate::new(
        action,
        form,
        errors,
        csrf_token,
        selection,
        viewer.has_permission(Permission::ViewOpsecTimer),
    ))?;

    Ok(page.into_response())
}

async fn render_invalid_form(
    state: &AppState,
    session: &Session,
    viewer: &Viewer,
    action: FormAction,
    form: TimerForm,
    errors: FormErrors,
) -> Result<Response, Error> {
    let page = render_form(state, session, viewer, action, form, errors).await?;

    Ok((StatusCode::BAD_REQUEST, page).into_response())
}
