//! Tests for the systems endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use bgs_ledger::{
    model::{api::PageDto, reference::Reference, system::SystemDto},
    server::{controller::system::get_systems, query::system::SystemQuery},
};

use super::*;

/// Expect 400 Bad Request when an anonymous caller supplies no filter
#[tokio::test]
async fn anonymous_without_filter_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_systems(
        State(test.to_app_state()),
        test.session,
        Query(SystemQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect faction references to resolve with the faction's live presence in the system
#[tokio::test]
async fn faction_details_attach_presence() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let sol = test.system().insert_system("Sol").await?;
    test.system().insert_faction_reference(&sol, "Mother Gaia").await?;
    test.system().insert_faction_reference(&sol, "Gone Faction").await?;
    let gaia = test.faction().insert_faction("Mother Gaia").await?;
    test.faction().insert_presence(&gaia, "Sol", 0.6).await?;

    let query = SystemQuery {
        name: Some("Sol".to_string()),
        faction_details: Some("true".to_string()),
        ..Default::default()
    };
    let resp = get_systems(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<SystemDto> = json_body(resp).await;
    let factions = &page.docs[0].factions;
    assert_eq!(factions.len(), 2);

    let gaia_ref = factions
        .iter()
        .find(|f| f.name_lower == "mother gaia")
        .unwrap();
    let link = gaia_ref.faction_ref.resolved().unwrap();
    assert_eq!(link.id, gaia.id);
    assert_eq!(link.presence.as_ref().map(|p| p.influence), Some(0.6));

    let gone = factions
        .iter()
        .find(|f| f.name_lower == "gone faction")
        .unwrap();
    assert_eq!(gone.faction_ref, Reference::Unresolved);

    Ok(())
}

/// Expect the faction filter to match systems referencing that faction
#[tokio::test]
async fn faction_filter_matches_referencing_systems() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let sol = test.system().insert_system("Sol").await?;
    let alpha = test.system().insert_system("Alpha Centauri").await?;
    test.system().insert_faction_reference(&sol, "Mother Gaia").await?;
    test.system().insert_faction_reference(&alpha, "Hutton Orbital Truckers").await?;

    let query = SystemQuery {
        faction: Some("Mother Gaia".to_string()),
        ..Default::default()
    };
    let resp = get_systems(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<SystemDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.docs[0].id, sol.id);

    Ok(())
}

/// Expect a count to return only the most recent records, oldest first
#[tokio::test]
async fn count_returns_latest_history() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let sol = test.system().insert_system("Sol").await?;
    for offset in [0, 1_000, 2_000] {
        test.system()
            .insert_history(&sol, &["Mother Gaia"], factory::at(factory::FIXED_MILLIS + offset))
            .await?;
    }
    let gaia = test.faction().insert_faction("Mother Gaia").await?;
    test.faction()
        .insert_history(&gaia, "Sol", factory::at(factory::FIXED_MILLIS))
        .await?;

    let query = SystemQuery {
        name: Some("sol".to_string()),
        count: Some("2".to_string()),
        ..Default::default()
    };
    let resp = get_systems(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<SystemDto> = json_body(resp).await;
    let system = &page.docs[0];
    let history = system.history.clone().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].updated_at, factory::at(factory::FIXED_MILLIS + 1_000));
    assert_eq!(history[1].updated_at, factory::at(factory::FIXED_MILLIS + 2_000));
    assert!(history[0].factions[0].faction_ref.is_resolved());

    let faction_history = system.faction_history.clone().unwrap();
    assert_eq!(faction_history.len(), 1);
    assert_eq!(faction_history[0].faction, "mother gaia");

    Ok(())
}
