//! Tests for the user endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bgs_ledger::{
    model::{
        api::PageDto,
        user::{NamedDto, UserDto, UserUpdateDto},
    },
    server::{
        controller::user::{get_users, update_user},
        query::user::UserQuery,
    },
};
use entity::bgs_user::{ACCESS_ADMIN, ACCESS_NORMAL};

use super::*;

fn update_for(user: &entity::bgs_user::Model) -> UserUpdateDto {
    UserUpdateDto {
        id: user.id,
        username: user.username.clone(),
        discriminator: user.discriminator.clone(),
        access: user.access,
        avatar: None,
        os_contribution: None,
        patronage: None,
        factions: None,
        systems: None,
    }
}

/// Expect 404 Not Found when listing users without a signed-in user
#[tokio::test]
async fn list_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = get_users(
        State(test.to_app_state()),
        test.session,
        Query(UserQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 403 Forbidden when a regular user lists users
#[tokio::test]
async fn list_as_regular_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    sign_in(&test, ACCESS_NORMAL).await?;

    let resp = get_users(
        State(test.to_app_state()),
        test.session,
        Query(UserQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect administrators to search users by case-insensitive username prefix
#[tokio::test]
async fn list_by_username_prefix() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    sign_in(&test, ACCESS_ADMIN).await?;
    test.user().insert_user("200", "Hutton Trucker", ACCESS_NORMAL).await?;
    test.user().insert_user("300", "Explorer", ACCESS_NORMAL).await?;

    let query = UserQuery {
        begins_with: Some("hut".to_string()),
        ..Default::default()
    };
    let resp = get_users(State(test.to_app_state()), test.session, Query(query))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<UserDto> = json_body(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.docs[0].username, "Hutton Trucker");

    Ok(())
}

/// Expect users to update their own followed systems
#[tokio::test]
async fn update_self() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = sign_in(&test, ACCESS_NORMAL).await?;

    let mut update = update_for(&user);
    update.avatar = Some(Some("avatar-hash".to_string()));
    update.systems = Some(Some(vec![NamedDto {
        name: "Sol".to_string(),
        name_lower: "sol".to_string(),
    }]));

    let resp = update_user(State(test.to_app_state()), test.session, Json(update))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.avatar.as_deref(), Some("avatar-hash"));
    assert_eq!(user.systems.len(), 1);

    Ok(())
}

/// Expect 403 Forbidden when a regular user updates someone else
#[tokio::test]
async fn update_other_user_as_regular_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    sign_in(&test, ACCESS_NORMAL).await?;
    let other = test.user().insert_user("200", "other", ACCESS_NORMAL).await?;

    let resp = update_user(
        State(test.to_app_state()),
        test.session,
        Json(update_for(&other)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 400 Bad Request when a followed name has a mismatched lowercase form
#[tokio::test]
async fn update_with_mismatched_name_lower() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = sign_in(&test, ACCESS_NORMAL).await?;

    let mut update = update_for(&user);
    update.factions = Some(Some(vec![NamedDto {
        name: "Mother Gaia".to_string(),
        name_lower: "Mother Gaia".to_string(),
    }]));

    let resp = update_user(State(test.to_app_state()), test.session, Json(update))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
