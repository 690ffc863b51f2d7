//! Tests for the admin utility endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use bgs_ledger::{
    model::{admin::ScriptRunDto, ingame_ids::IngameIdsDto},
    server::{
        controller::admin::{get_background_images, get_ingame_ids, get_scripts, run_script},
        model::app::AppState,
    },
};
use entity::bgs_user::{ACCESS_ADMIN, ACCESS_NORMAL};

use super::*;

/// Expect administrators to see every built-in script
#[tokio::test]
async fn scripts_as_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    sign_in(&test, ACCESS_ADMIN).await?;

    let resp = get_scripts(State(test.to_app_state()), test.session)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let scripts: Vec<String> = json_body(resp).await;
    assert!(scripts.contains(&"normalize-faction-names".to_string()));
    assert_eq!(scripts.len(), 3);

    Ok(())
}

/// Expect 403 Forbidden when a regular user lists scripts
#[tokio::test]
async fn scripts_as_regular_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    sign_in(&test, ACCESS_NORMAL).await?;

    let resp = get_scripts(State(test.to_app_state()), test.session)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 Not Found when running a script that does not exist
#[tokio::test]
async fn run_unknown_script() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    sign_in(&test, ACCESS_ADMIN).await?;

    let request = ScriptRunDto {
        script: "drop-everything".to_string(),
    };
    let resp = run_script(State(test.to_app_state()), test.session, Json(request))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect true once a known script has been started
#[tokio::test]
async fn run_known_script() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    sign_in(&test, ACCESS_ADMIN).await?;

    let request = ScriptRunDto {
        script: "normalize-system-names".to_string(),
    };
    let resp = run_script(State(test.to_app_state()), test.session, Json(request))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let started: bool = json_body(resp).await;
    assert!(started);

    Ok(())
}

/// Expect the loaded identifier tables to be served unchanged
#[tokio::test]
async fn ingame_ids_are_served() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut ids = IngameIdsDto::default();
    ids.economy
        .insert("$economy_agri;".to_string(), "Agriculture".to_string());

    let mut state: AppState = test.to_app_state();
    state.ingame_ids = Arc::new(ids.clone());

    let resp = get_ingame_ids(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let served: IngameIdsDto = json_body(resp).await;
    assert_eq!(served, ids);

    Ok(())
}

/// Expect 500 Internal Server Error when the background directory is missing
#[tokio::test]
async fn background_images_missing_directory() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut state: AppState = test.to_app_state();
    state.background_images_dir = "does/not/exist".into();

    let resp = get_background_images(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
