use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::history_rows, model::db::StationHistoryModel, query::history::HistoryRequest,
};

pub struct StationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationRepository<'a> {
    /// Creates a new instance of [`StationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Services offered by the given stations
    pub async fn services(
        &self,
        station_ids: &[i32],
    ) -> Result<Vec<entity::station_service::Model>, DbErr> {
        if station_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::StationService::find()
            .filter(entity::station_service::Column::StationId.is_in(station_ids.iter().copied()))
            .order_by_asc(entity::station_service::Column::Id)
            .all(self.db)
            .await
    }

    /// Ships sold at the given stations
    pub async fn ships(
        &self,
        station_ids: &[i32],
    ) -> Result<Vec<entity::station_ship::Model>, DbErr> {
        if station_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::StationShip::find()
            .filter(entity::station_ship::Column::StationId.is_in(station_ids.iter().copied()))
            .order_by_asc(entity::station_ship::Column::Id)
            .all(self.db)
            .await
    }

    /// Commodities exported by the given stations
    pub async fn commodities(
        &self,
        station_ids: &[i32],
    ) -> Result<Vec<entity::station_commodity::Model>, DbErr> {
        if station_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::StationCommodity::find()
            .filter(
                entity::station_commodity::Column::StationId.is_in(station_ids.iter().copied()),
            )
            .order_by_asc(entity::station_commodity::Column::Id)
            .all(self.db)
            .await
    }

    /// Outfitting modules sold at the given stations
    pub async fn modules(
        &self,
        station_ids: &[i32],
    ) -> Result<Vec<entity::station_module::Model>, DbErr> {
        if station_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::StationModule::find()
            .filter(entity::station_module::Column::StationId.is_in(station_ids.iter().copied()))
            .order_by_asc(entity::station_module::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn history(
        &self,
        station_id: i32,
        request: &HistoryRequest,
    ) -> Result<Vec<StationHistoryModel>, DbErr> {
        let select = entity::prelude::StationHistory::find()
            .filter(entity::station_history::Column::StationId.eq(station_id));

        history_rows(
            self.db,
            select,
            entity::station_history::Column::UpdatedAt,
            request,
        )
        .await
    }

    /// Recomputes `name_lower` from `name` for every station
    ///
    /// Returns the number of rows updated.
    pub async fn normalize_names(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Station::update_many()
            .col_expr(
                entity::station::Column::NameLower,
                Func::lower(Expr::col(entity::station::Column::Name)).into(),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
