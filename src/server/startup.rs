use std::path::Path;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

use crate::{
    model::ingame_ids::IngameIdsDto,
    server::{
        config::Config,
        error::{config::ConfigError, Error},
    },
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database, migrations applied");

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<Pool>>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as RedisConfig};

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Plain HTTP cookies are only accepted in debug builds.
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Load the in-game identifier tables served by `/api/ingameids`
///
/// # Returns
/// - `Ok(IngameIdsDto)` - The parsed tables
/// - `Err(ConfigError::IngameIds)` - The file is missing or is not valid JSON
pub async fn load_ingame_ids(path: &Path) -> Result<IngameIdsDto, ConfigError> {
    let failed = |reason: String| ConfigError::IngameIds {
        path: path.display().to_string(),
        reason,
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| failed(e.to_string()))?;

    serde_json::from_str(&raw).map_err(|e| failed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect the bundled tables to parse
    #[tokio::test]
    async fn bundled_ingame_ids_load() {
        let ids = load_ingame_ids(Path::new("assets/ingame_ids.json"))
            .await
            .unwrap();

        assert!(!ids.state.is_empty());
    }

    /// Expect a missing file to be reported with its path
    #[tokio::test]
    async fn missing_ingame_ids_file() {
        let result = load_ingame_ids(Path::new("assets/missing.json")).await;

        assert!(matches!(
            result,
            Err(ConfigError::IngameIds { path, .. }) if path == "assets/missing.json"
        ));
    }
}
