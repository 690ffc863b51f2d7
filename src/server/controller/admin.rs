use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{admin::ScriptRunDto, api::ErrorDto, ingame_ids::IngameIdsDto},
    server::{
        controller::util::caller::require_user,
        error::{auth::AuthError, Error},
        model::{app::AppState, caller::Caller},
        service::admin::{self, AdminService},
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Fails unless the signed-in user is an administrator.
async fn require_admin(state: &AppState, session: &Session) -> Result<Caller, Error> {
    let caller = require_user(state, session).await?;

    match &caller {
        Caller::User(user) if !caller.is_privileged() => {
            Err(AuthError::AccessDenied(user.id).into())
        }
        _ => Ok(caller),
    }
}

/// List the file names of the available background images
#[utoipa::path(
    get,
    path = "/api/backgroundimages",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Background image file names", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_background_images(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let images = admin::background_images(&state.background_images_dir).await?;

    Ok((StatusCode::OK, Json(images)))
}

/// List the built-in maintenance scripts
#[utoipa::path(
    get,
    path = "/api/scripts",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Script names", body = Vec<String>),
        (status = 403, description = "Caller is not an administrator", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scripts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let scripts = AdminService::new(&state.db).scripts();

    Ok((StatusCode::OK, Json(scripts)))
}

/// Start a maintenance script in the background
///
/// Responds once the script has been started, not when it finishes.
#[utoipa::path(
    put,
    path = "/api/scripts/run",
    tag = ADMIN_TAG,
    request_body = ScriptRunDto,
    responses(
        (status = 200, description = "Script started", body = bool),
        (status = 403, description = "Caller is not an administrator", body = ErrorDto),
        (status = 404, description = "User or script not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn run_script(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ScriptRunDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    AdminService::new(&state.db).run(&request.script)?;

    Ok((StatusCode::OK, Json(true)))
}

/// Get the in-game identifier tables
#[utoipa::path(
    get,
    path = "/api/ingameids",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Identifier to display name tables", body = IngameIdsDto)
    ),
)]
pub async fn get_ingame_ids(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(IngameIdsDto::clone(&state.ingame_ids)))
}
