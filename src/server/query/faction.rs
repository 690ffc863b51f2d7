use entity::faction_presence_state::{KIND_ACTIVE, KIND_PENDING, KIND_RECOVERING};
use sea_orm::sea_query::{DynIden, IntoIden};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::query::QueryError,
    query::{
        filter::{Clause, Filter, FilterField, Target},
        history::HistoryRequest,
        lookup::{Lookup, LookupSource},
        params,
        system::SystemField,
    },
};

/// Filterable faction fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactionField {
    Id,
    EddbId,
    NameLower,
    Allegiance,
    Government,
    /// Lowercase name of a system the faction is present in
    PresenceSystem,
    ActiveState,
    PendingState,
    RecoveringState,
}

impl FactionField {
    fn state(kind: &'static str) -> Target {
        use entity::faction_presence_state::{Column, Entity};

        Target::Child {
            table: Entity.into_iden(),
            owner: Column::FactionId.into_iden(),
            value: Column::State.into_iden(),
            kind: Some((Column::Kind.into_iden(), kind)),
        }
    }
}

impl FilterField for FactionField {
    fn table() -> DynIden {
        entity::faction::Entity.into_iden()
    }

    fn primary_key() -> DynIden {
        entity::faction::Column::Id.into_iden()
    }

    fn target(self) -> Target {
        use entity::faction::Column;

        match self {
            Self::Id => Target::Column(Column::Id.into_iden()),
            Self::EddbId => Target::Column(Column::EddbId.into_iden()),
            Self::NameLower => Target::Column(Column::NameLower.into_iden()),
            Self::Allegiance => Target::Column(Column::Allegiance.into_iden()),
            Self::Government => Target::Column(Column::Government.into_iden()),
            Self::PresenceSystem => Target::Child {
                table: entity::faction_presence::Entity.into_iden(),
                owner: entity::faction_presence::Column::FactionId.into_iden(),
                value: entity::faction_presence::Column::SystemNameLower.into_iden(),
                kind: None,
            },
            Self::ActiveState => Self::state(KIND_ACTIVE),
            Self::PendingState => Self::state(KIND_PENDING),
            Self::RecoveringState => Self::state(KIND_RECOVERING),
        }
    }
}

/// Query parameters accepted by the faction listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FactionQuery {
    /// Database ids, comma separated
    pub id: Option<String>,
    /// EDDB ids, comma separated
    pub eddb_id: Option<String>,
    /// Exact names, comma separated, case-insensitive
    pub name: Option<String>,
    pub allegiance: Option<String>,
    pub government: Option<String>,
    /// Case-insensitive name prefix
    pub begins_with: Option<String>,
    /// Names of systems the faction is present in, comma separated
    pub system: Option<String>,
    /// Ids of systems the faction is present in, comma separated
    #[serde(rename = "systemid")]
    pub system_id: Option<String>,
    pub active_state: Option<String>,
    pub pending_state: Option<String>,
    pub recovering_state: Option<String>,
    /// Restrict history to the systems named by `system`/`systemid`
    pub filter_system_in_history: Option<String>,
    /// Omit presence details
    pub minimal: Option<String>,
    /// Attach full system summaries to each presence
    pub system_details: Option<String>,
    /// History window start, epoch milliseconds
    pub timemin: Option<String>,
    /// History window end, epoch milliseconds
    pub timemax: Option<String>,
    /// Number of most recent history records, takes precedence over the window
    pub count: Option<String>,
    pub page: Option<String>,
}

impl FactionQuery {
    /// Builds the local filter and the cross-collection lookups still to resolve.
    pub fn filter(&self) -> Result<(Filter<FactionField>, Vec<Lookup<FactionField>>), QueryError> {
        let mut filter = Filter::new();
        let mut lookups = Vec::new();

        filter.any_of(FactionField::Id, params::number_list::<i32>("id", self.id.as_deref())?);
        filter.any_of(
            FactionField::EddbId,
            params::number_list::<i64>("eddbId", self.eddb_id.as_deref())?,
        );
        filter.any_of(FactionField::NameLower, params::list(self.name.as_deref()));
        filter.any_of(FactionField::Allegiance, params::list(self.allegiance.as_deref()));
        filter.any_of(FactionField::Government, params::list(self.government.as_deref()));

        if let Some(prefix) = params::lower(self.begins_with.as_deref()) {
            filter.push(Clause::Prefix(FactionField::NameLower, prefix));
        }

        filter.any_of(FactionField::PresenceSystem, params::list(self.system.as_deref()));
        filter.any_of(FactionField::ActiveState, params::list(self.active_state.as_deref()));
        filter.any_of(FactionField::PendingState, params::list(self.pending_state.as_deref()));
        filter.any_of(
            FactionField::RecoveringState,
            params::list(self.recovering_state.as_deref()),
        );

        if let Some(ids) = params::number_list::<i32>("systemid", self.system_id.as_deref())? {
            let mut systems = Filter::new();
            systems.any_of(SystemField::Id, Some(ids));

            lookups.push(Lookup {
                constrains: FactionField::PresenceSystem,
                source: LookupSource::SystemNames(systems),
            });
        }

        Ok((filter, lookups))
    }

    /// Parses the history parameters; `minimal` cannot be combined with `count`.
    pub fn history(&self) -> Result<Option<HistoryRequest>, QueryError> {
        let request = HistoryRequest::from_params(
            self.timemin.as_deref(),
            self.timemax.as_deref(),
            self.count.as_deref(),
        )?;

        if self.minimal() && request.is_some_and(|r| r.is_count()) {
            return Err(QueryError::MinimalWithCount);
        }

        Ok(request)
    }

    pub fn page(&self) -> u64 {
        params::page(self.page.as_deref())
    }

    pub fn minimal(&self) -> bool {
        params::flag(self.minimal.as_deref())
    }

    pub fn system_details(&self) -> bool {
        params::flag(self.system_details.as_deref())
    }

    pub fn filter_system_in_history(&self) -> bool {
        params::flag(self.filter_system_in_history.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait, Value};

    use super::*;

    fn sql(filter: &Filter<FactionField>) -> String {
        entity::prelude::Faction::find()
            .filter(filter.condition())
            .build(DbBackend::Sqlite)
            .to_string()
    }

    /// Expect comma lists to become lowercase any-of clauses
    #[test]
    fn name_list_is_lowercased_any_of() {
        let query = FactionQuery {
            name: Some("A, b,C".to_string()),
            ..Default::default()
        };

        let (filter, lookups) = query.filter().unwrap();

        assert!(lookups.is_empty());
        assert_eq!(
            filter.clauses(),
            &[Clause::AnyOf(
                FactionField::NameLower,
                vec![Value::from("a"), Value::from("b"), Value::from("c")]
            )]
        );
    }

    /// Expect a begins-with prefix to compile to an escaped LIKE
    #[test]
    fn begins_with_compiles_to_escaped_like() {
        let query = FactionQuery {
            begins_with: Some("Al_".to_string()),
            ..Default::default()
        };

        let (filter, _) = query.filter().unwrap();
        let sql = sql(&filter);

        assert!(sql.contains(r#""faction"."name_lower" LIKE"#), "{sql}");
        assert!(sql.contains("ESCAPE"), "{sql}");
    }

    /// Expect state filters to sub-select on the presence state table by kind
    #[test]
    fn state_filter_uses_child_sub_select() {
        let query = FactionQuery {
            pending_state: Some("war".to_string()),
            ..Default::default()
        };

        let (filter, _) = query.filter().unwrap();
        let sql = sql(&filter);

        assert!(
            sql.contains(r#""faction"."id" IN (SELECT "faction_presence_state"."faction_id""#),
            "{sql}"
        );
        assert!(sql.contains(r#""faction_presence_state"."kind" = 'pending'"#), "{sql}");
    }

    /// Expect system ids to become a pending lookup on presence systems
    #[test]
    fn system_id_becomes_lookup() {
        let query = FactionQuery {
            system_id: Some("3, 4".to_string()),
            ..Default::default()
        };

        let (filter, lookups) = query.filter().unwrap();

        assert!(filter.is_empty());
        assert_eq!(lookups.len(), 1);
        assert_eq!(lookups[0].constrains, FactionField::PresenceSystem);
    }

    /// Expect paging and display parameters not to count as filters
    #[test]
    fn paging_parameters_leave_filter_empty() {
        let query = FactionQuery {
            page: Some("2".to_string()),
            minimal: Some("true".to_string()),
            timemin: Some("1600000000000".to_string()),
            ..Default::default()
        };

        let (filter, lookups) = query.filter().unwrap();

        assert!(filter.is_empty());
        assert!(lookups.is_empty());
    }

    /// Expect minimal combined with count to be a usage error
    #[test]
    fn minimal_with_count_is_rejected() {
        let query = FactionQuery {
            minimal: Some("true".to_string()),
            count: Some("3".to_string()),
            ..Default::default()
        };

        assert!(matches!(query.history(), Err(QueryError::MinimalWithCount)));
    }
}
