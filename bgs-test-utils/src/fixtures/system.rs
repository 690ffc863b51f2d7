use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn system<'a>(&'a self) -> SystemFixtures<'a> {
        SystemFixtures { test: self }
    }
}

pub struct SystemFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> SystemFixtures<'a> {
    /// Insert any system active model.
    pub async fn insert(
        &self,
        system: entity::system::ActiveModel,
    ) -> Result<entity::system::Model, TestError> {
        Ok(system.insert(&self.test.db).await?)
    }

    /// Insert a system with default values.
    pub async fn insert_system(&self, name: &str) -> Result<entity::system::Model, TestError> {
        self.insert(factory::system(name)).await
    }

    /// Record `faction_name` as present in `system`.
    pub async fn insert_faction_reference(
        &self,
        system: &entity::system::Model,
        faction_name: &str,
    ) -> Result<entity::system_faction::Model, TestError> {
        Ok(
            entity::prelude::SystemFaction::insert(entity::system_faction::ActiveModel {
                system_id: ActiveValue::Set(system.id),
                name: ActiveValue::Set(faction_name.to_string()),
                name_lower: ActiveValue::Set(faction_name.to_lowercase()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a history record naming `faction_names` as present.
    pub async fn insert_history(
        &self,
        system: &entity::system::Model,
        faction_names: &[&str],
        updated_at: NaiveDateTime,
    ) -> Result<entity::system_history::Model, TestError> {
        Ok(factory::system_history(system, faction_names, updated_at)
            .insert(&self.test.db)
            .await?)
    }
}
