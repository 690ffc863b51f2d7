use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        community::{CreditDto, DonorDto, PatronDto},
    },
    server::{error::Error, model::app::AppState, service::community::CommunityService},
};

pub static COMMUNITY_TAG: &str = "community";

/// List every donation, newest first
#[utoipa::path(
    get,
    path = "/api/donors",
    tag = COMMUNITY_TAG,
    responses(
        (status = 200, description = "Donations with their donors", body = Vec<DonorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donors(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let donors = CommunityService::new(&state.db).donors().await?;

    Ok((StatusCode::OK, Json(donors)))
}

/// List patrons, newest first
#[utoipa::path(
    get,
    path = "/api/patrons",
    tag = COMMUNITY_TAG,
    responses(
        (status = 200, description = "Users with an active patronage", body = Vec<PatronDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patrons(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let patrons = CommunityService::new(&state.db).patrons().await?;

    Ok((StatusCode::OK, Json(patrons)))
}

/// List contributors and higher tier patrons
#[utoipa::path(
    get,
    path = "/api/credits",
    tag = COMMUNITY_TAG,
    responses(
        (status = 200, description = "Credited users", body = Vec<CreditDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_credits(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let credits = CommunityService::new(&state.db).credits().await?;

    Ok((StatusCode::OK, Json(credits)))
}
