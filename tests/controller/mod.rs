//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an in-memory database and session, and their
//! responses are checked for status codes and JSON bodies.

mod admin;
mod community;
mod faction;
mod station;
mod system;
mod user;

use axum::{body::to_bytes, response::Response};
use bgs_ledger::server::model::session::user::SessionUserId;
use bgs_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Decode a JSON response body.
async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a user with `access` and sign them into the test session.
async fn sign_in(test: &TestContext, access: i32) -> Result<entity::bgs_user::Model, TestError> {
    let user = test
        .user()
        .insert_user("100000000000000001", "cmdr", access)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    Ok(user)
}
