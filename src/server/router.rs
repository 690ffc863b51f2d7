//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI specification, and Swagger UI
//! serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/factions`, `GET /api/systems`, `GET /api/stations` - Filtered, paginated listings
/// - `GET /api/users`, `PUT /api/users` - User administration
/// - `GET /api/donors`, `GET /api/patrons`, `GET /api/credits` - Community views
/// - `GET /api/backgroundimages`, `GET /api/ingameids` - Static resources
/// - `GET /api/scripts`, `PUT /api/scripts/run` - Maintenance scripts
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "BGS Ledger", description = "BGS Ledger API"), tags(
        (name = controller::faction::FACTION_TAG, description = "Faction listing"),
        (name = controller::system::SYSTEM_TAG, description = "System listing"),
        (name = controller::station::STATION_TAG, description = "Station listing"),
        (name = controller::user::USER_TAG, description = "User administration"),
        (name = controller::community::COMMUNITY_TAG, description = "Donors, patrons and credits"),
        (name = controller::admin::ADMIN_TAG, description = "Static resources and maintenance scripts"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::faction::get_factions))
        .routes(routes!(controller::system::get_systems))
        .routes(routes!(controller::station::get_stations))
        .routes(routes!(controller::user::get_users, controller::user::update_user))
        .routes(routes!(controller::community::get_donors))
        .routes(routes!(controller::community::get_patrons))
        .routes(routes!(controller::community::get_credits))
        .routes(routes!(controller::admin::get_background_images))
        .routes(routes!(controller::admin::get_scripts))
        .routes(routes!(controller::admin::run_script))
        .routes(routes!(controller::admin::get_ingame_ids))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
