use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::{UserDonationModel, UserModel};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::BgsUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Applies the set fields of `changes` to an existing user
    ///
    /// Returns `None` if the user does not exist.
    pub async fn update(
        &self,
        user_id: i32,
        mut changes: entity::bgs_user::ActiveModel,
    ) -> Result<Option<UserModel>, DbErr> {
        if self.get(user_id).await?.is_none() {
            return Ok(None);
        }

        changes.id = ActiveValue::Unchanged(user_id);

        Ok(Some(changes.update(self.db).await?))
    }

    /// Donations of the given users, oldest first
    pub async fn donations(&self, user_ids: &[i32]) -> Result<Vec<UserDonationModel>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BgsUserDonation::find()
            .filter(entity::bgs_user_donation::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::bgs_user_donation::Column::Date)
            .all(self.db)
            .await
    }

    /// Followed factions of the given users
    pub async fn factions(
        &self,
        user_ids: &[i32],
    ) -> Result<Vec<entity::bgs_user_faction::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BgsUserFaction::find()
            .filter(entity::bgs_user_faction::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::bgs_user_faction::Column::Id)
            .all(self.db)
            .await
    }

    /// Followed systems of the given users
    pub async fn systems(
        &self,
        user_ids: &[i32],
    ) -> Result<Vec<entity::bgs_user_system::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BgsUserSystem::find()
            .filter(entity::bgs_user_system::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::bgs_user_system::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the user's followed factions with `names` (`(name, name_lower)` pairs)
    pub async fn replace_factions(
        &self,
        user_id: i32,
        names: Vec<(String, String)>,
    ) -> Result<(), DbErr> {
        entity::prelude::BgsUserFaction::delete_many()
            .filter(entity::bgs_user_faction::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if names.is_empty() {
            return Ok(());
        }

        let rows = names
            .into_iter()
            .map(|(name, name_lower)| entity::bgs_user_faction::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name),
                name_lower: ActiveValue::Set(name_lower),
                ..Default::default()
            });

        entity::prelude::BgsUserFaction::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the user's followed systems with `names` (`(name, name_lower)` pairs)
    pub async fn replace_systems(
        &self,
        user_id: i32,
        names: Vec<(String, String)>,
    ) -> Result<(), DbErr> {
        entity::prelude::BgsUserSystem::delete_many()
            .filter(entity::bgs_user_system::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if names.is_empty() {
            return Ok(());
        }

        let rows = names
            .into_iter()
            .map(|(name, name_lower)| entity::bgs_user_system::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name),
                name_lower: ActiveValue::Set(name_lower),
                ..Default::default()
            });

        entity::prelude::BgsUserSystem::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Every donation with its donor, newest first
    pub async fn donors(&self) -> Result<Vec<(UserDonationModel, Option<UserModel>)>, DbErr> {
        entity::prelude::BgsUserDonation::find()
            .find_also_related(entity::bgs_user::Entity)
            .order_by_desc(entity::bgs_user_donation::Column::Date)
            .order_by_desc(entity::bgs_user_donation::Column::Id)
            .all(self.db)
            .await
    }

    /// Users with any patronage, most recent patrons first
    pub async fn patrons(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::BgsUser::find()
            .filter(entity::bgs_user::Column::PatronageLevel.gt(0))
            .order_by_desc(entity::bgs_user::Column::PatronageSince)
            .order_by_asc(entity::bgs_user::Column::Id)
            .all(self.db)
            .await
    }

    /// Users credited for contributions or higher patronage tiers
    pub async fn credited(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::BgsUser::find()
            .filter(
                Condition::any()
                    .add(entity::bgs_user::Column::OsContribution.gt(0))
                    .add(entity::bgs_user::Column::PatronageLevel.gt(1)),
            )
            .order_by_asc(entity::bgs_user::Column::Id)
            .all(self.db)
            .await
    }
}
