//! Tests for the factions endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use bgs_ledger::{
    model::{api::PageDto, faction::FactionDto, reference::Reference},
    server::{controller::faction::get_factions, query::faction::FactionQuery},
};
use entity::bgs_user::ACCESS_ADMIN;
use sea_orm::ActiveValue;

use super::*;

/// Expect 400 Bad Request when an anonymous caller supplies no filter
#[tokio::test]
async fn anonymous_without_filter_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.faction().insert_faction("Mother Gaia").await?;

    let result = get_factions(
        State(test.to_app_state()),
        test.session,
        Query(FactionQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect administrators to list every faction without a filter
#[tokio::test]
async fn admin_without_filter_lists_all() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    sign_in(&test, ACCESS_ADMIN).await?;
    test.faction().insert_faction("Mother Gaia").await?;
    test.faction().insert_faction("Sirius Corporation").await?;

    let result = get_factions(
        State(test.to_app_state()),
        test.session,
        Query(FactionQuery::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<FactionDto> = json_body(resp).await;
    assert_eq!(page.total, 2);
    assert_eq!(page.pages, 1);

    Ok(())
}

/// Expect presences to link to their system, flagging the controlling faction
#[tokio::test]
async fn presence_links_to_controlled_system() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let faction = test.faction().insert_faction("Mother Gaia").await?;
    test.faction().insert_presence(&faction, "Sol", 0.6).await?;
    test.faction().insert_presence(&faction, "Nowhere", 0.1).await?;

    let mut sol = factory::system("Sol");
    sol.controlling_minor_faction = ActiveValue::Set(Some("mother gaia".to_string()));
    let sol = test.system().insert(sol).await?;

    let query = FactionQuery {
        name: Some("MOTHER GAIA".to_string()),
        ..Default::default()
    };
    let resp = get_factions(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<FactionDto> = json_body(resp).await;
    let presences = page.docs[0].faction_presence.clone().unwrap();
    assert_eq!(presences.len(), 2);

    let in_sol = presences
        .iter()
        .find(|p| p.system_name_lower == "sol")
        .unwrap();
    let link = in_sol.system_ref.resolved().unwrap();
    assert_eq!(link.id, sol.id);
    assert!(link.controlling);

    let nowhere = presences
        .iter()
        .find(|p| p.system_name_lower == "nowhere")
        .unwrap();
    assert_eq!(nowhere.system_ref, Reference::Unresolved);

    Ok(())
}

/// Expect a single time bound to select history within one week of it
#[tokio::test]
async fn timemin_selects_one_week_of_history() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let faction = test.faction().insert_faction("Mother Gaia").await?;
    let week = 604_800_000;
    test.faction()
        .insert_history(&faction, "Sol", factory::at(factory::FIXED_MILLIS + 1_000))
        .await?;
    test.faction()
        .insert_history(&faction, "Sol", factory::at(factory::FIXED_MILLIS + week + 1_000))
        .await?;

    let query = FactionQuery {
        name: Some("mother gaia".to_string()),
        timemin: Some(factory::FIXED_MILLIS.to_string()),
        ..Default::default()
    };
    let resp = get_factions(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<FactionDto> = json_body(resp).await;
    let history = page.docs[0].history.clone().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].system_lower, "sol");

    Ok(())
}

/// Expect 400 Bad Request when minimal output is combined with a history count
#[tokio::test]
async fn minimal_with_count_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let query = FactionQuery {
        name: Some("mother gaia".to_string()),
        minimal: Some("true".to_string()),
        count: Some("2".to_string()),
        ..Default::default()
    };
    let resp = get_factions(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect pages of ten ordered by id, with the total across all pages
#[tokio::test]
async fn second_page_holds_the_remainder() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    for i in 0..12 {
        test.faction()
            .insert_faction(&format!("Alpha Faction {:02}", i))
            .await?;
    }

    let query = FactionQuery {
        begins_with: Some("al".to_string()),
        page: Some("2".to_string()),
        ..Default::default()
    };
    let resp = get_factions(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<FactionDto> = json_body(resp).await;
    assert_eq!(page.total, 12);
    assert_eq!(page.pages, 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.docs.len(), 2);
    assert_eq!(page.docs[0].name, "Alpha Faction 10");

    Ok(())
}

/// Expect faction filters on presence systems to AND with the name filter
#[tokio::test]
async fn system_filter_intersects_with_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let gaia = test.faction().insert_faction("Mother Gaia").await?;
    let sirius = test.faction().insert_faction("Sirius Corporation").await?;
    test.faction().insert_presence(&gaia, "Sol", 0.6).await?;
    test.faction().insert_presence(&sirius, "Sol", 0.4).await?;

    let query = FactionQuery {
        system: Some("sol".to_string()),
        begins_with: Some("sir".to_string()),
        minimal: Some("true".to_string()),
        ..Default::default()
    };
    let resp = get_factions(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<FactionDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.docs[0].id, sirius.id);
    assert!(page.docs[0].faction_presence.is_none());

    Ok(())
}

/// Expect `beginsWith` to treat `_` and `.` as literal characters
#[tokio::test]
async fn begins_with_matches_literal_punctuation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let underscore = test.faction().insert_faction("a_b Corp").await?;
    let dot = test.faction().insert_faction("a.b Corp").await?;
    test.faction().insert_faction("axb Corp").await?;

    for (prefix, expected) in [("a_b", underscore.id), ("a.b", dot.id)] {
        let query = FactionQuery {
            begins_with: Some(prefix.to_string()),
            minimal: Some("true".to_string()),
            ..Default::default()
        };
        let resp = get_factions(State(test.to_app_state()), test.session.clone(), Query(query))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let page: PageDto<FactionDto> = json_body(resp).await;
        let ids: Vec<i32> = page.docs.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![expected], "prefix {prefix}");
    }

    Ok(())
}

/// Expect `systemid` to be resolved to system names before filtering presences
#[tokio::test]
async fn system_id_filters_by_presence() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let sol = test.system().insert_system("Sol").await?;
    test.system().insert_system("Achenar").await?;
    let gaia = test.faction().insert_faction("Mother Gaia").await?;
    let empire = test.faction().insert_faction("Achenar Empire League").await?;
    test.faction().insert_presence(&gaia, "Sol", 0.6).await?;
    test.faction().insert_presence(&empire, "Achenar", 0.7).await?;

    let query = FactionQuery {
        system_id: Some(sol.id.to_string()),
        minimal: Some("true".to_string()),
        ..Default::default()
    };
    let resp = get_factions(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<FactionDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.docs[0].id, gaia.id);

    Ok(())
}
