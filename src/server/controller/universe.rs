use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, universe::Select2ResponseDto},
    server::{
        controller::util::get_user::get_viewer_from_session, error::Error,
        model::app::AppState, service::universe::UniverseService,
    },
};

pub static UNIVERSE_TAG: &str = "universe";

#[derive(Deserialize, IntoParams)]
pub struct Select2Query {
    /// Text typed into the select2 widget
    #[serde(default)]
    pub term: String,
}

/// Solar systems whose name contains the search term
#[utoipa::path(
    get,
    path = "/timers/select2_solar_systems",
    tag = UNIVERSE_TAG,
    params(Select2Query),
    responses(
        (status = 200, description = "Matching solar systems ordered by name", body = Select2ResponseDto),
        (status = 401, description = "No user in session", body = ErrorDto),
        (status = 403, description = "User lacks basic access", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn select2_solar_systems(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<Select2Query>,
) -> Result<impl IntoResponse, Error> {
    get_viewer_from_session(&state, &session).await?;

    let results = UniverseService::new(&state.db)
        .search_solar_systems(&query.term)
        .await?;

    Ok(Json(results))
}

/// Structure types whose name contains the search term
#[utoipa::path(
    get,
    path = "/timers/select2_structure_types",
    tag = UNIVERSE_TAG,
    params(Select2Query),
    responses(
        (status = 200, description = "Matching structure types ordered by name", body = Select2ResponseDto),
        (status = 401, description = "No user in session", body = ErrorDto),
        (status = 403, description = "User lacks basic access", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn select2_structure_types(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<Select2Query>,
) -> Result<impl IntoResponse, Error> {
    get_viewer_from_session(&state, &session).await?;

    let results = UniverseService::new(&state.db)
        .search_structure_types(&query.term)
        .await?;

    Ok(Json(results))
}
