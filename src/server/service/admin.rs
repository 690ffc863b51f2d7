//! Administrative utilities: background image listing and maintenance scripts.

use std::path::Path;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{faction::FactionRepository, station::StationRepository, system::SystemRepository},
    error::admin::AdminError,
};

/// Built-in maintenance scripts that can be started from the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Script {
    NormalizeFactionNames,
    NormalizeSystemNames,
    NormalizeStationNames,
}

impl Script {
    pub const ALL: [Script; 3] = [
        Script::NormalizeFactionNames,
        Script::NormalizeSystemNames,
        Script::NormalizeStationNames,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::NormalizeFactionNames => "normalize-faction-names",
            Self::NormalizeSystemNames => "normalize-system-names",
            Self::NormalizeStationNames => "normalize-station-names",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|script| script.name() == name)
    }

    /// Runs the script to completion, returning the number of rows it touched.
    pub async fn run(self, db: &DatabaseConnection) -> Result<u64, DbErr> {
        match self {
            Self::NormalizeFactionNames => FactionRepository::new(db).normalize_names().await,
            Self::NormalizeSystemNames => SystemRepository::new(db).normalize_names().await,
            Self::NormalizeStationNames => StationRepository::new(db).normalize_names().await,
        }
    }
}

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    /// Creates a new instance of [`AdminService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Names of every built-in script.
    pub fn scripts(&self) -> Vec<String> {
        Script::ALL
            .into_iter()
            .map(|script| script.name().to_string())
            .collect()
    }

    /// Starts the named script in the background
    ///
    /// Returns as soon as the script is spawned; its outcome is only logged.
    ///
    /// # Returns
    /// - `Ok(Script)` - The script that was started
    /// - `Err(AdminError::UnknownScript)` - No script has that name
    pub fn run(&self, name: &str) -> Result<Script, AdminError> {
        let script =
            Script::from_name(name).ok_or_else(|| AdminError::UnknownScript(name.to_string()))?;

        let db = self.db.clone();
        tokio::spawn(async move {
            tracing::info!(script = %script.name(), "Maintenance script started");

            match script.run(&db).await {
                Ok(rows) => {
                    tracing::info!(script = %script.name(), rows, "Maintenance script finished")
                }
                Err(e) => {
                    tracing::error!(script = %script.name(), "Maintenance script failed: {}", e)
                }
            }
        });

        Ok(script)
    }
}

/// File names in `dir`, sorted. Subdirectories and hidden files are skipped.
pub async fn background_images(dir: &Path) -> Result<Vec<String>, AdminError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !entry.file_type().await?.is_file() {
            continue;
        }

        names.push(name);
    }

    names.sort();

    Ok(names)
}

#[cfg(test)]
mod tests {
    use bgs_test_utils::prelude::*;
    use entity::prelude::Faction;
    use sea_orm::{ActiveValue, EntityTrait};

    use super::*;

    /// Expect every script to be found by its own name
    #[test]
    fn script_names_round_trip() {
        for script in Script::ALL {
            assert_eq!(Script::from_name(script.name()), Some(script));
        }
        assert_eq!(Script::from_name("drop-everything"), None);
    }

    /// Expect an unknown script to be rejected without spawning anything
    #[tokio::test]
    async fn run_unknown_script() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = AdminService::new(&test.db).run("drop-everything");

        assert!(matches!(result, Err(AdminError::UnknownScript(_))));

        Ok(())
    }

    /// Expect the faction script to recompute lowercase names
    #[tokio::test]
    async fn normalize_faction_names() -> Result<(), TestError> {
        let test = TestBuilder::new().with_faction_tables().build().await?;
        let mut faction = factory::faction("Mother Gaia");
        faction.name_lower = ActiveValue::Set("stale".to_string());
        let faction = test.faction().insert(faction).await?;

        let rows = Script::NormalizeFactionNames.run(&test.db).await?;
        let faction = Faction::find_by_id(faction.id).one(&test.db).await?.unwrap();

        assert_eq!(rows, 1);
        assert_eq!(faction.name_lower, "mother gaia");

        Ok(())
    }

    /// Expect a missing directory to surface as an I/O error
    #[tokio::test]
    async fn background_images_missing_directory() {
        let result = background_images(Path::new("does/not/exist")).await;

        assert!(matches!(result, Err(AdminError::BackgroundImages(_))));
    }
}
