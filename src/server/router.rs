//! HTTP routing and OpenAPI documentation configuration.
//!
//! JSON endpoints are registered through utoipa so they appear in the OpenAPI document
//! served with Swagger UI at `/api/docs`. The HTML pages and form submissions are plain
//! axum routes.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /timers/` - Timer board page
/// - `GET /timers/list_data/{tab_name}` - Timers of the `current` or `past` tab
/// - `GET /timers/get_timer_data/{timer_id}` - Details of one timer
/// - `GET /timers/select2_solar_systems` - Solar system autocomplete
/// - `GET /timers/select2_structure_types` - Structure type autocomplete
/// - `GET|POST /timers/add` - Create a timer
/// - `GET|POST /timers/edit/{timer_id}` - Edit a timer
/// - `GET|POST /timers/remove/{timer_id}` - Remove a timer
///
/// # Returns
/// A `Router<AppState>` that still needs its state and the session layer.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Structure Timers", description = "Structure timer board API"), tags(
        (name = controller::timer::TIMER_TAG, description = "Timer board data routes"),
        (name = controller::universe::UNIVERSE_TAG, description = "Solar system and structure type autocomplete routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::timer::timer_list_data))
        .routes(routes!(controller::timer::get_timer_data))
        .routes(routes!(controller::universe::select2_solar_systems))
        .routes(routes!(controller::universe::select2_structure_types))
        .split_for_parts();

    routes
        .route("/timers/", get(controller::timer::timer_list))
        .route(
            "/timers/add",
            get(controller::timer_form::add_timer_page).post(controller::timer_form::add_timer),
        )
        .route(
            "/timers/edit/{timer_id}",
            get(controller::timer_form::edit_timer_page).post(controller::timer_form::edit_timer),
        )
        .route(
            "/timers/remove/{timer_id}",
            get(controller::timer_form::remove_timer_page)
                .post(controller::timer_form::remove_timer),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
