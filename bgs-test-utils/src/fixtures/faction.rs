use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn faction<'a>(&'a self) -> FactionFixtures<'a> {
        FactionFixtures { test: self }
    }
}

pub struct FactionFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> FactionFixtures<'a> {
    /// Insert any faction active model.
    pub async fn insert(
        &self,
        faction: entity::faction::ActiveModel,
    ) -> Result<entity::faction::Model, TestError> {
        Ok(faction.insert(&self.test.db).await?)
    }

    /// Insert a faction with default values.
    pub async fn insert_faction(&self, name: &str) -> Result<entity::faction::Model, TestError> {
        self.insert(factory::faction(name)).await
    }

    /// Insert a presence record for `faction` in `system_name`.
    pub async fn insert_presence(
        &self,
        faction: &entity::faction::Model,
        system_name: &str,
        influence: f64,
    ) -> Result<entity::faction_presence::Model, TestError> {
        Ok(factory::presence(faction.id, system_name, influence)
            .insert(&self.test.db)
            .await?)
    }

    /// Attach a state of `kind` (`active`, `pending` or `recovering`) to a presence.
    pub async fn insert_presence_state(
        &self,
        presence: &entity::faction_presence::Model,
        kind: &str,
        state: &str,
    ) -> Result<entity::faction_presence_state::Model, TestError> {
        Ok(entity::prelude::FactionPresenceState::insert(
            entity::faction_presence_state::ActiveModel {
                presence_id: ActiveValue::Set(presence.id),
                faction_id: ActiveValue::Set(presence.faction_id),
                kind: ActiveValue::Set(kind.to_string()),
                state: ActiveValue::Set(state.to_string()),
                trend: ActiveValue::Set(Some(0)),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Insert a history record for `faction` in `system_name`.
    pub async fn insert_history(
        &self,
        faction: &entity::faction::Model,
        system_name: &str,
        updated_at: NaiveDateTime,
    ) -> Result<entity::faction_history::Model, TestError> {
        Ok(factory::faction_history(faction, system_name, updated_at)
            .insert(&self.test.db)
            .await?)
    }
}
