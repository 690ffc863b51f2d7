//! Tests for the donors, patrons and credits endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bgs_ledger::{
    model::community::{CreditDto, DonorDto, PatronDto},
    server::{
        controller::community::{get_credits, get_donors, get_patrons},
        model::app::AppState,
    },
};
use entity::bgs_user::ACCESS_NORMAL;
use sea_orm::ActiveValue;

use super::*;

/// Expect one donor entry per donation
#[tokio::test]
async fn donors_list_each_donation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("1", "cmdr", ACCESS_NORMAL).await?;
    test.user()
        .insert_donation(&user, 5.0, factory::at(factory::FIXED_MILLIS))
        .await?;
    test.user()
        .insert_donation(&user, 2.5, factory::at(factory::FIXED_MILLIS + 1_000))
        .await?;

    let resp = get_donors(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let donors: Vec<DonorDto> = json_body(resp).await;
    assert_eq!(donors.len(), 2);
    assert_eq!(donors[0].amount, 2.5);

    Ok(())
}

/// Expect patrons newest first and credits limited to contributors and higher tiers
#[tokio::test]
async fn patrons_and_credits() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let mut early = factory::user("1", "early patron", ACCESS_NORMAL);
    early.patronage_level = ActiveValue::Set(2);
    early.patronage_since = ActiveValue::Set(Some(factory::at(factory::FIXED_MILLIS)));
    test.user().insert(early).await?;

    let mut recent = factory::user("2", "recent patron", ACCESS_NORMAL);
    recent.patronage_level = ActiveValue::Set(1);
    recent.patronage_since = ActiveValue::Set(Some(factory::at(factory::FIXED_MILLIS + 1_000)));
    test.user().insert(recent).await?;

    let state: AppState = test.to_app_state();

    let resp = get_patrons(State(state.clone())).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let patrons: Vec<PatronDto> = json_body(resp).await;
    assert_eq!(patrons.len(), 2);
    assert_eq!(patrons[0].username, "recent patron");

    let resp = get_credits(State(state)).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let credits: Vec<CreditDto> = json_body(resp).await;
    assert_eq!(credits.len(), 1);
    assert_eq!(credits[0].username, "early patron");
    assert_eq!(credits[0].level, 2);

    Ok(())
}
