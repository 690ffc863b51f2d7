use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert any user active model.
    pub async fn insert(
        &self,
        user: entity::bgs_user::ActiveModel,
    ) -> Result<entity::bgs_user::Model, TestError> {
        Ok(user.insert(&self.test.db).await?)
    }

    /// Insert a user with default values and the given access level.
    pub async fn insert_user(
        &self,
        discord_id: &str,
        username: &str,
        access: i32,
    ) -> Result<entity::bgs_user::Model, TestError> {
        self.insert(factory::user(discord_id, username, access)).await
    }

    pub async fn insert_donation(
        &self,
        user: &entity::bgs_user::Model,
        amount: f64,
        date: NaiveDateTime,
    ) -> Result<entity::bgs_user_donation::Model, TestError> {
        Ok(
            entity::prelude::BgsUserDonation::insert(entity::bgs_user_donation::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                amount: ActiveValue::Set(amount),
                date: ActiveValue::Set(date),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Add `name` to the user's followed factions.
    pub async fn insert_faction_interest(
        &self,
        user: &entity::bgs_user::Model,
        name: &str,
    ) -> Result<entity::bgs_user_faction::Model, TestError> {
        Ok(
            entity::prelude::BgsUserFaction::insert(entity::bgs_user_faction::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                name: ActiveValue::Set(name.to_string()),
                name_lower: ActiveValue::Set(name.to_lowercase()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
