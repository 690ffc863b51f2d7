use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn station<'a>(&'a self) -> StationFixtures<'a> {
        StationFixtures { test: self }
    }
}

pub struct StationFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> StationFixtures<'a> {
    /// Insert any station active model.
    pub async fn insert(
        &self,
        station: entity::station::ActiveModel,
    ) -> Result<entity::station::Model, TestError> {
        Ok(station.insert(&self.test.db).await?)
    }

    /// Insert a station with default values.
    pub async fn insert_station(
        &self,
        name: &str,
        system_name: &str,
    ) -> Result<entity::station::Model, TestError> {
        self.insert(factory::station(name, system_name)).await
    }

    pub async fn insert_ship(
        &self,
        station: &entity::station::Model,
        name: &str,
    ) -> Result<entity::station_ship::Model, TestError> {
        Ok(
            entity::prelude::StationShip::insert(entity::station_ship::ActiveModel {
                station_id: ActiveValue::Set(station.id),
                name: ActiveValue::Set(name.to_string()),
                name_lower: ActiveValue::Set(name.to_lowercase()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_service(
        &self,
        station: &entity::station::Model,
        name: &str,
    ) -> Result<entity::station_service::Model, TestError> {
        Ok(
            entity::prelude::StationService::insert(entity::station_service::ActiveModel {
                station_id: ActiveValue::Set(station.id),
                name: ActiveValue::Set(name.to_string()),
                name_lower: ActiveValue::Set(name.to_lowercase()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_commodity(
        &self,
        station: &entity::station::Model,
        name: &str,
    ) -> Result<entity::station_commodity::Model, TestError> {
        Ok(
            entity::prelude::StationCommodity::insert(entity::station_commodity::ActiveModel {
                station_id: ActiveValue::Set(station.id),
                name: ActiveValue::Set(name.to_string()),
                name_lower: ActiveValue::Set(name.to_lowercase()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_module(
        &self,
        station: &entity::station::Model,
        module_id: i64,
    ) -> Result<entity::station_module::Model, TestError> {
        Ok(
            entity::prelude::StationModule::insert(entity::station_module::ActiveModel {
                station_id: ActiveValue::Set(station.id),
                module_id: ActiveValue::Set(module_id),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_history(
        &self,
        station: &entity::station::Model,
        updated_at: NaiveDateTime,
    ) -> Result<entity::station_history::Model, TestError> {
        Ok(factory::station_history(station, updated_at)
            .insert(&self.test.db)
            .await?)
    }
}
