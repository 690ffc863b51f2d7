use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        user::{UserDto, UserUpdateDto},
    },
    server::{
        controller::util::caller::require_user,
        error::Error,
        model::app::AppState,
        query::user::UserQuery,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List dashboard users with their donations and followed factions and systems
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserQuery),
    responses(
        (status = 200, description = "One page of users", body = PageDto<UserDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 403, description = "Caller is not an administrator", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<UserQuery>,
) -> Result<impl IntoResponse, Error> {
    let caller = require_user(&state, &session).await?;

    let page = UserService::new(&state.db, state.query_timeout)
        .list(&query, &caller)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Update a user
///
/// Administrators may update any user. Other users may only update themselves and
/// cannot change their access level. `null` unsets optional fields and clears the
/// followed lists.
#[utoipa::path(
    put,
    path = "/api/users",
    tag = USER_TAG,
    request_body = UserUpdateDto,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 400, description = "Invalid update body", body = ErrorDto),
        (status = 403, description = "Caller may not make this update", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Json(update): Json<UserUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = require_user(&state, &session).await?;

    let user = UserService::new(&state.db, state.query_timeout)
        .update(update, &caller)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
