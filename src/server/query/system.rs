use sea_orm::sea_query::{DynIden, IntoIden};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::query::QueryError,
    query::{
        filter::{Clause, Filter, FilterField, Target},
        history::HistoryRequest,
        params,
    },
};

/// Filterable system fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemField {
    Id,
    EddbId,
    NameLower,
    Allegiance,
    Government,
    State,
    PrimaryEconomy,
    SecondaryEconomy,
    Security,
    Power,
    PowerState,
    NeedsPermit,
    /// Lowercase name of a faction present in the system
    Faction,
}

impl FilterField for SystemField {
    fn table() -> DynIden {
        entity::system::Entity.into_iden()
    }

    fn primary_key() -> DynIden {
        entity::system::Column::Id.into_iden()
    }

    fn target(self) -> Target {
        use entity::system::Column;

        let column = match self {
            Self::Id => Column::Id,
            Self::EddbId => Column::EddbId,
            Self::NameLower => Column::NameLower,
            Self::Allegiance => Column::Allegiance,
            Self::Government => Column::Government,
            Self::State => Column::State,
            Self::PrimaryEconomy => Column::PrimaryEconomy,
            Self::SecondaryEconomy => Column::SecondaryEconomy,
            Self::Security => Column::Security,
            Self::Power => Column::Power,
            Self::PowerState => Column::PowerState,
            Self::NeedsPermit => Column::NeedsPermit,
            Self::Faction => {
                return Target::Child {
                    table: entity::system_faction::Entity.into_iden(),
                    owner: entity::system_faction::Column::SystemId.into_iden(),
                    value: entity::system_faction::Column::NameLower.into_iden(),
                    kind: None,
                }
            }
        };

        Target::Column(column.into_iden())
    }
}

/// Query parameters accepted by the system listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SystemQuery {
    /// Database ids, comma separated
    pub id: Option<String>,
    /// EDDB ids, comma separated
    pub eddb_id: Option<String>,
    /// Exact names, comma separated, case-insensitive
    pub name: Option<String>,
    pub allegiance: Option<String>,
    pub government: Option<String>,
    pub state: Option<String>,
    #[serde(alias = "primaryeconomy")]
    pub primary_economy: Option<String>,
    pub secondary_economy: Option<String>,
    pub security: Option<String>,
    pub power: Option<String>,
    pub power_state: Option<String>,
    /// `true` for permit-locked systems only, anything else for open systems only
    pub permit: Option<String>,
    /// Names of factions present in the system, comma separated
    pub faction: Option<String>,
    /// Case-insensitive name prefix
    pub begins_with: Option<String>,
    /// Attach each referenced faction's live presence in the system
    pub faction_details: Option<String>,
    /// History window start, epoch milliseconds
    pub timemin: Option<String>,
    /// History window end, epoch milliseconds
    pub timemax: Option<String>,
    /// Number of most recent history records, takes precedence over the window
    pub count: Option<String>,
    pub page: Option<String>,
}

impl SystemQuery {
    pub fn filter(&self) -> Result<Filter<SystemField>, QueryError> {
        let mut filter = Filter::new();

        filter.any_of(SystemField::Id, params::number_list::<i32>("id", self.id.as_deref())?);
        filter.any_of(
            SystemField::EddbId,
            params::number_list::<i64>("eddbId", self.eddb_id.as_deref())?,
        );
        filter.any_of(SystemField::NameLower, params::list(self.name.as_deref()));
        filter.any_of(SystemField::Allegiance, params::list(self.allegiance.as_deref()));
        filter.any_of(SystemField::Government, params::list(self.government.as_deref()));
        filter.any_of(SystemField::State, params::list(self.state.as_deref()));
        filter.any_of(
            SystemField::PrimaryEconomy,
            params::list(self.primary_economy.as_deref()),
        );
        filter.any_of(
            SystemField::SecondaryEconomy,
            params::list(self.secondary_economy.as_deref()),
        );
        filter.any_of(SystemField::Security, params::list(self.security.as_deref()));
        filter.any_of(SystemField::Power, params::list(self.power.as_deref()));
        filter.any_of(SystemField::PowerState, params::list(self.power_state.as_deref()));
        filter.any_of(SystemField::Faction, params::list(self.faction.as_deref()));

        if let Some(permit) = params::optional_flag(self.permit.as_deref()) {
            filter.push(Clause::Equals(SystemField::NeedsPermit, permit.into()));
        }

        if let Some(prefix) = params::lower(self.begins_with.as_deref()) {
            filter.push(Clause::Prefix(SystemField::NameLower, prefix));
        }

        Ok(filter)
    }

    pub fn history(&self) -> Result<Option<HistoryRequest>, QueryError> {
        HistoryRequest::from_params(
            self.timemin.as_deref(),
            self.timemax.as_deref(),
            self.count.as_deref(),
        )
    }

    pub fn page(&self) -> u64 {
        params::page(self.page.as_deref())
    }

    pub fn faction_details(&self) -> bool {
        params::flag(self.faction_details.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Value;

    use super::*;

    /// Expect permit to become a boolean equality clause
    #[test]
    fn permit_is_boolean_equality() {
        let query = SystemQuery {
            permit: Some("TRUE".to_string()),
            ..Default::default()
        };

        let filter = query.filter().unwrap();

        assert_eq!(
            filter.clauses(),
            &[Clause::Equals(SystemField::NeedsPermit, Value::from(true))]
        );
    }

    /// Expect every supplied parameter to contribute one clause
    #[test]
    fn parameters_are_conjoined() {
        let query = SystemQuery {
            name: Some("Sol".to_string()),
            begins_with: Some("so".to_string()),
            faction: Some("Mother Gaia".to_string()),
            ..Default::default()
        };

        let filter = query.filter().unwrap();

        assert_eq!(filter.clauses().len(), 3);
    }

    /// Expect the front-end spelling of the primary economy to be accepted
    #[test]
    fn primary_economy_alias_deserializes() {
        let query: SystemQuery =
            serde_json::from_str(r#"{"primaryeconomy":"$economy_Industrial;"}"#).unwrap();

        assert_eq!(query.primary_economy.as_deref(), Some("$economy_Industrial;"));
    }

    /// Expect invalid ids to be a usage error
    #[test]
    fn invalid_id_is_rejected() {
        let query = SystemQuery {
            id: Some("1,two".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            query.filter(),
            Err(QueryError::InvalidParameter { name: "id", .. })
        ));
    }
}
