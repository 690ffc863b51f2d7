use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::{
    data::history_rows,
    model::db::{SystemFactionModel, SystemHistoryModel, SystemModel},
    query::history::HistoryRequest,
};

pub struct SystemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemRepository<'a> {
    /// Creates a new instance of [`SystemRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lowercase names of every system matching `condition`
    pub async fn names_matching(&self, condition: Condition) -> Result<Vec<String>, DbErr> {
        entity::prelude::System::find()
            .select_only()
            .column(entity::system::Column::NameLower)
            .filter(condition)
            .order_by_asc(entity::system::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Systems whose lowercase name is in `names_lower`
    pub async fn find_by_names(&self, names_lower: &[String]) -> Result<Vec<SystemModel>, DbErr> {
        if names_lower.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::System::find()
            .filter(entity::system::Column::NameLower.is_in(names_lower.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Faction references of the given systems, ordered by system then record id
    pub async fn faction_references(
        &self,
        system_ids: &[i32],
    ) -> Result<Vec<SystemFactionModel>, DbErr> {
        if system_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::SystemFaction::find()
            .filter(entity::system_faction::Column::SystemId.is_in(system_ids.iter().copied()))
            .order_by_asc(entity::system_faction::Column::SystemId)
            .order_by_asc(entity::system_faction::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn history(
        &self,
        system_id: i32,
        request: &HistoryRequest,
    ) -> Result<Vec<SystemHistoryModel>, DbErr> {
        let select = entity::prelude::SystemHistory::find()
            .filter(entity::system_history::Column::SystemId.eq(system_id));

        history_rows(
            self.db,
            select,
            entity::system_history::Column::UpdatedAt,
            request,
        )
        .await
    }

    /// Recomputes `name_lower` from `name` for every system
    ///
    /// Returns the number of rows updated.
    pub async fn normalize_names(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::System::update_many()
            .col_expr(
                entity::system::Column::NameLower,
                Func::lower(Expr::col(entity::system::Column::Name)).into(),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
