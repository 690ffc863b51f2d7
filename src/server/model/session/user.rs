use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "bgs:user:id";

/// Database id of the signed-in user, as stored by the login flow.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session.get::<SessionUserId>(SESSION_USER_ID_KEY).await?;

        Ok(user_id.map(|SessionUserId(id)| id))
    }

    /// Remove a user ID whose user no longer exists
    pub async fn remove(session: &Session) -> Result<(), Error> {
        session.remove::<SessionUserId>(SESSION_USER_ID_KEY).await?;

        Ok(())
    }
}
