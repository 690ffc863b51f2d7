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
        station::StationDto,
    },
    server::{
        controller::util::caller::caller_from_session,
        error::Error,
        model::app::AppState,
        query::station::StationQuery,
        service::station::StationService,
    },
};

pub static STATION_TAG: &str = "station";

/// List stations matching the query; system, power and controlling faction filters
/// are resolved against their own collections first
#[utoipa::path(
    get,
    path = "/api/stations",
    tag = STATION_TAG,
    params(StationQuery),
    responses(
        (status = 200, description = "One page of matching stations", body = PageDto<StationDto>),
        (status = 400, description = "Missing or invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<StationQuery>,
) -> Result<impl IntoResponse, Error> {
    let caller = caller_from_session(&state, &session).await?;

    let page = StationService::new(&state.db, state.query_timeout)
        .list(&query, &caller)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}
