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
        system::SystemDto,
    },
    server::{
        controller::util::caller::caller_from_session,
        error::Error,
        model::app::AppState,
        query::system::SystemQuery,
        service::system::SystemService,
    },
};

pub static SYSTEM_TAG: &str = "system";

/// List systems matching the query, with faction references and history
///
/// Every supplied filter must match. Only administrators may list without any filter.
#[utoipa::path(
    get,
    path = "/api/systems",
    tag = SYSTEM_TAG,
    params(SystemQuery),
    responses(
        (status = 200, description = "One page of matching systems", body = PageDto<SystemDto>),
        (status = 400, description = "Missing or invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_systems(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SystemQuery>,
) -> Result<impl IntoResponse, Error> {
    let caller = caller_from_session(&state, &session).await?;

    let page = SystemService::new(&state.db, state.query_timeout)
        .list(&query, &caller)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}
