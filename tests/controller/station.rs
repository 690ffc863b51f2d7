//! Tests for the stations endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use bgs_ledger::{
    model::{api::PageDto, station::StationDto},
    server::{controller::station::get_stations, query::station::StationQuery},
};
use sea_orm::ActiveValue;

use super::*;

/// Expect only stations with every requested facility
#[tokio::test]
async fn facilities_filter_requires_each_facility() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let mut full = factory::station("Abraham Lincoln", "Sol");
    full.has_market = ActiveValue::Set(true);
    full.has_shipyard = ActiveValue::Set(true);
    let full = test.station().insert(full).await?;
    let mut market_only = factory::station("Daedalus", "Sol");
    market_only.has_market = ActiveValue::Set(true);
    test.station().insert(market_only).await?;

    let query = StationQuery {
        facilities: Some("market, shipyard".to_string()),
        ..Default::default()
    };
    let resp = get_stations(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<StationDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.docs[0].id, full.id);
    assert!(page.docs[0].facilities.has_shipyard);

    Ok(())
}

/// Expect 400 Bad Request for an unknown facility
#[tokio::test]
async fn unknown_facility_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let query = StationQuery {
        facilities: Some("casino".to_string()),
        ..Default::default()
    };
    let resp = get_stations(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect all-of ship filters to match only stations selling every ship
#[tokio::test]
async fn ships_filter_requires_all_ships() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let both = test.station().insert_station("Abraham Lincoln", "Sol").await?;
    test.station().insert_ship(&both, "Anaconda").await?;
    test.station().insert_ship(&both, "Python").await?;
    let one = test.station().insert_station("Daedalus", "Sol").await?;
    test.station().insert_ship(&one, "Python").await?;

    let query = StationQuery {
        ships: Some("Anaconda,Python".to_string()),
        ..Default::default()
    };
    let resp = get_stations(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<StationDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.docs[0].id, both.id);
    assert_eq!(page.docs[0].selling_ships.len(), 2);

    Ok(())
}

/// Expect the controlling faction name to be resolved to faction ids first
#[tokio::test]
async fn controlling_faction_name_filters_by_faction_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let gaia = test.faction().insert_faction("Mother Gaia").await?;
    let mut sol = factory::system("Sol");
    sol.controlling_minor_faction = ActiveValue::Set(Some("mother gaia".to_string()));
    let sol = test.system().insert(sol).await?;

    let mut controlled = factory::station("Abraham Lincoln", "Sol");
    controlled.controlling_minor_faction = ActiveValue::Set(Some("Mother Gaia".to_string()));
    controlled.controlling_minor_faction_id = ActiveValue::Set(Some(gaia.id));
    let controlled = test.station().insert(controlled).await?;
    test.station().insert_station("Daedalus", "Sol").await?;

    let query = StationQuery {
        controllingfactionname: Some("Mother Gaia".to_string()),
        ..Default::default()
    };
    let resp = get_stations(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<StationDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.docs[0].id, controlled.id);

    let link = page.docs[0].system_ref.resolved().unwrap();
    assert_eq!(link.id, sol.id);
    assert!(link.controlling);

    Ok(())
}

/// Expect a controlling faction that does not exist to match no stations
#[tokio::test]
async fn unknown_controlling_faction_matches_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.station().insert_station("Abraham Lincoln", "Sol").await?;

    let query = StationQuery {
        controllingfactionname: Some("Nobody".to_string()),
        ..Default::default()
    };
    let resp = get_stations(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<StationDto> = json_body(resp).await;
    assert_eq!(page.total, 0);
    assert!(page.docs.is_empty());

    Ok(())
}

/// Expect the legacy `restock` facility to require rearming
#[tokio::test]
async fn restock_facility_requires_rearm() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let mut armed = factory::station("Abraham Lincoln", "Sol");
    armed.has_rearm = ActiveValue::Set(true);
    let armed = test.station().insert(armed).await?;
    test.station().insert_station("Daedalus", "Sol").await?;

    let query = StationQuery {
        facilities: Some("restock".to_string()),
        ..Default::default()
    };
    let resp = get_stations(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<StationDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.docs[0].id, armed.id);

    Ok(())
}

/// Expect system-level parameters to select stations in matching systems only
#[tokio::test]
async fn power_state_and_permit_filter_by_system() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let mut sol = factory::system("Sol");
    sol.power_state = ActiveValue::Set(Some("control".to_string()));
    sol.needs_permit = ActiveValue::Set(true);
    test.system().insert(sol).await?;
    let mut achenar = factory::system("Achenar");
    achenar.power_state = ActiveValue::Set(Some("control".to_string()));
    test.system().insert(achenar).await?;

    let in_sol = test.station().insert_station("Abraham Lincoln", "Sol").await?;
    test.station().insert_station("Dawes Hub", "Achenar").await?;

    let query = StationQuery {
        powerstatename: Some("Control".to_string()),
        permit: Some("true".to_string()),
        ..Default::default()
    };
    let resp = get_stations(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<StationDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.docs[0].id, in_sol.id);

    Ok(())
}

/// Expect a failed lookup to drop its constraint while the rest of the query still runs
#[tokio::test]
async fn failed_lookup_drops_only_its_constraint() -> Result<(), TestError> {
    // No faction tables, so the controlling faction lookup fails
    let test = TestBuilder::new()
        .with_system_tables()
        .with_station_tables()
        .build()
        .await?;
    let lincoln = test.station().insert_station("Abraham Lincoln", "Sol").await?;
    test.station().insert_station("Daedalus", "Sol").await?;

    let query = StationQuery {
        name: Some("Abraham Lincoln".to_string()),
        controllingfactionname: Some("Mother Gaia".to_string()),
        ..Default::default()
    };
    let resp = get_stations(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<StationDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.docs[0].id, lincoln.id);

    Ok(())
}
