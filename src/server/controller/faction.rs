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
        faction::FactionDto,
    },
    server::{
        controller::util::caller::caller_from_session,
        error::Error,
        model::app::AppState,
        query::faction::FactionQuery,
        service::faction::FactionService,
    },
};

pub static FACTION_TAG: &str = "faction";

/// List factions matching the query, with presences, history and linked systems
///
/// Every supplied filter must match. Only administrators may list without any filter.
#[utoipa::path(
    get,
    path = "/api/factions",
    tag = FACTION_TAG,
    params(FactionQuery),
    responses(
        (status = 200, description = "One page of matching factions", body = PageDto<FactionDto>),
        (status = 400, description = "Missing or invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_factions(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FactionQuery>,
) -> Result<impl IntoResponse, Error> {
    let caller = caller_from_session(&state, &session).await?;

    let page = FactionService::new(&state.db, state.query_timeout)
        .list(&query, &caller)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}
