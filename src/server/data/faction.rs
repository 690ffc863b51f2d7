use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::{
    data::history_rows,
    model::db::{FactionHistoryModel, FactionModel, FactionPresenceModel, FactionPresenceStateModel},
    query::history::HistoryRequest,
};

pub struct FactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactionRepository<'a> {
    /// Creates a new instance of [`FactionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ids of every faction matching `condition`
    pub async fn ids_matching(&self, condition: Condition) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Faction::find()
            .select_only()
            .column(entity::faction::Column::Id)
            .filter(condition)
            .order_by_asc(entity::faction::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Factions whose lowercase name is in `names_lower`
    pub async fn find_by_names(&self, names_lower: &[String]) -> Result<Vec<FactionModel>, DbErr> {
        if names_lower.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Faction::find()
            .filter(entity::faction::Column::NameLower.is_in(names_lower.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Presence records of the given factions, ordered by faction then record id
    pub async fn presences(&self, faction_ids: &[i32]) -> Result<Vec<FactionPresenceModel>, DbErr> {
        if faction_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FactionPresence::find()
            .filter(entity::faction_presence::Column::FactionId.is_in(faction_ids.iter().copied()))
            .order_by_asc(entity::faction_presence::Column::FactionId)
            .order_by_asc(entity::faction_presence::Column::Id)
            .all(self.db)
            .await
    }

    /// Presence records of the given factions restricted to the given systems
    pub async fn presences_in_systems(
        &self,
        faction_ids: &[i32],
        system_names_lower: &[String],
    ) -> Result<Vec<FactionPresenceModel>, DbErr> {
        if faction_ids.is_empty() || system_names_lower.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FactionPresence::find()
            .filter(entity::faction_presence::Column::FactionId.is_in(faction_ids.iter().copied()))
            .filter(
                entity::faction_presence::Column::SystemNameLower
                    .is_in(system_names_lower.iter().cloned()),
            )
            .order_by_asc(entity::faction_presence::Column::Id)
            .all(self.db)
            .await
    }

    /// States attached to the given presence records, ordered by record id
    pub async fn presence_states(
        &self,
        presence_ids: &[i32],
    ) -> Result<Vec<FactionPresenceStateModel>, DbErr> {
        if presence_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FactionPresenceState::find()
            .filter(
                entity::faction_presence_state::Column::PresenceId
                    .is_in(presence_ids.iter().copied()),
            )
            .order_by_asc(entity::faction_presence_state::Column::Id)
            .all(self.db)
            .await
    }

    /// History of one faction, optionally restricted to the given systems
    pub async fn history(
        &self,
        faction_id: i32,
        request: &HistoryRequest,
        system_names_lower: Option<&[String]>,
    ) -> Result<Vec<FactionHistoryModel>, DbErr> {
        let mut select = entity::prelude::FactionHistory::find()
            .filter(entity::faction_history::Column::FactionId.eq(faction_id));

        if let Some(systems) = system_names_lower {
            select = select.filter(
                entity::faction_history::Column::SystemLower.is_in(systems.iter().cloned()),
            );
        }

        history_rows(
            self.db,
            select,
            entity::faction_history::Column::UpdatedAt,
            request,
        )
        .await
    }

    /// History of every faction recorded in one system
    pub async fn history_in_system(
        &self,
        system_name_lower: &str,
        request: &HistoryRequest,
    ) -> Result<Vec<FactionHistoryModel>, DbErr> {
        let select = entity::prelude::FactionHistory::find()
            .filter(entity::faction_history::Column::SystemLower.eq(system_name_lower));

        history_rows(
            self.db,
            select,
            entity::faction_history::Column::UpdatedAt,
            request,
        )
        .await
    }

    /// Recomputes `name_lower` from `name` for every faction
    ///
    /// Returns the number of rows updated.
    pub async fn normalize_names(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Faction::update_many()
            .col_expr(
                entity::faction::Column::NameLower,
                Func::lower(Expr::col(entity::faction::Column::Name)).into(),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
