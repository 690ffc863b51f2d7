use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, caller::Caller, session::user::SessionUserId},
};

/// Identifies the caller of a public endpoint
///
/// Requests without a signed-in user are served anonymously. A session pointing at a
/// user that no longer exists has its user ID removed and is treated as anonymous.
///
/// # Returns
/// - `Ok(Caller)` - The signed-in user or `Caller::Anonymous`
/// - `Err(Error)` - Session or database failure
pub async fn caller_from_session(state: &AppState, session: &Session) -> Result<Caller, Error> {
    match lookup(state, session).await {
        Ok(user) => Ok(Caller::User(user)),
        Err(Error::AuthError(_)) => Ok(Caller::Anonymous),
        Err(e) => Err(e),
    }
}

/// Identifies the caller of an endpoint that requires a signed-in user
///
/// # Returns
/// - `Ok(Caller::User)` - The signed-in user
/// - `Err(Error::AuthError(AuthError::UserNotInSession))` - No user ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - User ID exists in session but not in the database (the ID is removed)
/// - `Err(Error)` - Session or database failure
pub async fn require_user(state: &AppState, session: &Session) -> Result<Caller, Error> {
    lookup(state, session).await.map(Caller::User)
}

async fn lookup(
    state: &AppState,
    session: &Session,
) -> Result<crate::server::model::db::UserModel, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserRepository::new(&state.db).get(user_id).await? else {
        SessionUserId::remove(session).await?;

        tracing::debug!(
            user_id = %user_id,
            "Removed user ID from session, user no longer exists in database"
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user)
}

#[cfg(test)]
mod tests {
    use bgs_test_utils::prelude::*;
    use entity::bgs_user::ACCESS_NORMAL;

    use super::*;

    /// Expect a session without a user ID to be served anonymously
    #[tokio::test]
    async fn anonymous_without_session_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_user_tables().build().await?;
        let state: AppState = test.to_app_state();

        let caller = caller_from_session(&state, &test.session).await.unwrap();

        assert_eq!(caller, Caller::Anonymous);

        Ok(())
    }

    /// Expect the signed-in user to be returned
    #[tokio::test]
    async fn user_from_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_user_tables().build().await?;
        let user = test.user().insert_user("1", "cmdr", ACCESS_NORMAL).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();
        let state: AppState = test.to_app_state();

        let caller = require_user(&state, &test.session).await.unwrap();

        assert_eq!(caller, Caller::User(user));

        Ok(())
    }

    /// Expect a stale user ID to be removed from the session
    #[tokio::test]
    async fn stale_user_is_removed() -> Result<(), TestError> {
        let test = TestBuilder::new().with_user_tables().build().await?;
        SessionUserId::insert(&test.session, 99).await.unwrap();
        let state: AppState = test.to_app_state();

        let result = require_user(&state, &test.session).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::UserNotInDatabase(99)))
        ));
        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }
}
