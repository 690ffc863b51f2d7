use std::{path::PathBuf, sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::model::ingame_ids::IngameIdsDto;

const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Read-only after startup
    pub ingame_ids: Arc<IngameIdsDto>,
    pub query_timeout: Duration,
    pub background_images_dir: PathBuf,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            ingame_ids: Arc::new(IngameIdsDto::default()),
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            background_images_dir: PathBuf::from("assets/backgrounds"),
        }
    }
}
