use sea_orm::sea_query::{DynIden, IntoIden};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::query::QueryError,
    query::{
        faction::FactionField,
        filter::{Clause, Filter, FilterField, Target},
        history::HistoryRequest,
        lookup::{Lookup, LookupSource},
        params,
        system::SystemField,
    },
};

/// Filterable station fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StationField {
    Id,
    EddbId,
    NameLower,
    Type,
    SystemLower,
    Economy,
    Allegiance,
    Government,
    State,
    /// Lowercase name of a ship sold at the station
    Ship,
    /// Outfitting module id sold at the station
    Module,
    /// Lowercase name of an exported commodity
    Commodity,
    Facility(Facility),
    LandingPad,
    DistanceFromStar,
    Planetary,
    ControllingFactionId,
}

/// Station services that can be required through `facilities`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facility {
    Market,
    BlackMarket,
    Refuel,
    Repair,
    Rearm,
    Outfitting,
    Shipyard,
}

impl Facility {
    pub fn parse(raw: &str) -> Option<Self> {
        Some(match raw {
            "market" => Self::Market,
            "blackmarket" => Self::BlackMarket,
            "refuel" => Self::Refuel,
            "repair" => Self::Repair,
            "rearm" | "restock" => Self::Rearm,
            "outfitting" => Self::Outfitting,
            "shipyard" => Self::Shipyard,
            _ => return None,
        })
    }

    fn column(self) -> entity::station::Column {
        use entity::station::Column;

        match self {
            Self::Market => Column::HasMarket,
            Self::BlackMarket => Column::HasBlackmarket,
            Self::Refuel => Column::HasRefuel,
            Self::Repair => Column::HasRepair,
            Self::Rearm => Column::HasRearm,
            Self::Outfitting => Column::HasOutfitting,
            Self::Shipyard => Column::HasShipyard,
        }
    }
}

fn named_child<E, C>(table: E, owner: C, value: C) -> Target
where
    E: IntoIden,
    C: IntoIden,
{
    Target::Child {
        table: table.into_iden(),
        owner: owner.into_iden(),
        value: value.into_iden(),
        kind: None,
    }
}

impl FilterField for StationField {
    fn table() -> DynIden {
        entity::station::Entity.into_iden()
    }

    fn primary_key() -> DynIden {
        entity::station::Column::Id.into_iden()
    }

    fn target(self) -> Target {
        use entity::station::Column;

        let column = match self {
            Self::Id => Column::Id,
            Self::EddbId => Column::EddbId,
            Self::NameLower => Column::NameLower,
            Self::Type => Column::StationType,
            Self::SystemLower => Column::SystemLower,
            Self::Economy => Column::Economy,
            Self::Allegiance => Column::Allegiance,
            Self::Government => Column::Government,
            Self::State => Column::State,
            Self::Facility(facility) => facility.column(),
            Self::LandingPad => Column::MaxLandingPadSize,
            Self::DistanceFromStar => Column::DistanceFromStar,
            Self::Planetary => Column::IsPlanetary,
            Self::ControllingFactionId => Column::ControllingMinorFactionId,
            Self::Ship => {
                use entity::station_ship::{Column, Entity};
                return named_child(Entity, Column::StationId, Column::NameLower);
            }
            Self::Commodity => {
                use entity::station_commodity::{Column, Entity};
                return named_child(Entity, Column::StationId, Column::NameLower);
            }
            Self::Module => {
                use entity::station_module::{Column, Entity};
                return named_child(Entity, Column::StationId, Column::ModuleId);
            }
        };

        Target::Column(column.into_iden())
    }
}

/// Query parameters accepted by the station listing.
///
/// Older clients send the `...name` spellings, which are accepted as aliases.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StationQuery {
    /// Database ids, comma separated
    pub id: Option<String>,
    /// EDDB ids, comma separated
    #[serde(rename = "eddbId")]
    pub eddb_id: Option<String>,
    /// Exact names, comma separated, case-insensitive
    pub name: Option<String>,
    /// Station types, comma separated
    #[serde(rename = "type", alias = "stationtypename")]
    pub station_type: Option<String>,
    /// Names of the systems hosting the station, comma separated
    pub system: Option<String>,
    #[serde(alias = "economyname")]
    pub economy: Option<String>,
    #[serde(alias = "allegiancename")]
    pub allegiance: Option<String>,
    #[serde(alias = "governmentname")]
    pub government: Option<String>,
    pub state: Option<String>,
    /// Case-insensitive name prefix
    #[serde(rename = "beginsWith")]
    pub begins_with: Option<String>,
    /// Ships that must all be sold, comma separated
    pub ships: Option<String>,
    /// Module ids that must all be sold, comma separated
    pub moduleid: Option<String>,
    /// Commodities that must all be exported, comma separated
    pub commodities: Option<String>,
    /// Required facilities, comma separated
    pub facilities: Option<String>,
    /// Smallest acceptable landing pad, one of `s`, `m` or `l`
    pub minlandingpad: Option<String>,
    /// Exclusive upper bound on the distance from the arrival star, in light seconds
    pub distancestar: Option<String>,
    pub planetary: Option<String>,
    /// Names of the controlling faction, comma separated
    pub controllingfactionname: Option<String>,
    /// Whether the hosting system needs a permit
    pub permit: Option<String>,
    /// Powers controlling the hosting system, comma separated
    pub power: Option<String>,
    /// Power states of the hosting system, comma separated
    pub powerstatename: Option<String>,
    /// History window start, epoch milliseconds
    pub timemin: Option<String>,
    /// History window end, epoch milliseconds
    pub timemax: Option<String>,
    /// Number of most recent history records, takes precedence over the window
    pub count: Option<String>,
    pub page: Option<String>,
}

impl StationQuery {
    /// Builds the local filter and the cross-collection lookups still to resolve.
    pub fn filter(&self) -> Result<(Filter<StationField>, Vec<Lookup<StationField>>), QueryError> {
        let mut filter = Filter::new();
        let mut lookups = Vec::new();

        filter.any_of(StationField::Id, params::number_list::<i32>("id", self.id.as_deref())?);
        filter.any_of(
            StationField::EddbId,
            params::number_list::<i64>("eddbId", self.eddb_id.as_deref())?,
        );
        filter.any_of(StationField::NameLower, params::list(self.name.as_deref()));
        filter.any_of(StationField::Type, params::list(self.station_type.as_deref()));
        filter.any_of(StationField::SystemLower, params::list(self.system.as_deref()));
        filter.any_of(StationField::Economy, params::list(self.economy.as_deref()));
        filter.any_of(StationField::Allegiance, params::list(self.allegiance.as_deref()));
        filter.any_of(StationField::Government, params::list(self.government.as_deref()));
        filter.any_of(StationField::State, params::list(self.state.as_deref()));

        if let Some(prefix) = params::lower(self.begins_with.as_deref()) {
            filter.push(Clause::Prefix(StationField::NameLower, prefix));
        }

        filter.all_of(StationField::Ship, params::list(self.ships.as_deref()));
        filter.all_of(
            StationField::Module,
            params::number_list::<i64>("moduleid", self.moduleid.as_deref())?,
        );
        filter.all_of(StationField::Commodity, params::list(self.commodities.as_deref()));

        for name in params::list(self.facilities.as_deref()).unwrap_or_default() {
            let facility = Facility::parse(&name).ok_or_else(|| {
                QueryError::invalid("facilities", format!("unknown facility {name:?}"))
            })?;

            filter.push(Clause::Equals(StationField::Facility(facility), true.into()));
        }

        if let Some(minimum) = params::lower(self.minlandingpad.as_deref()) {
            filter.any_of(StationField::LandingPad, Some(params::pads_at_least(&minimum)));
        }

        if let Some(distance) = params::number::<f64>("distancestar", self.distancestar.as_deref())? {
            filter.push(Clause::Below(StationField::DistanceFromStar, distance.into()));
        }

        if let Some(planetary) = params::optional_flag(self.planetary.as_deref()) {
            filter.push(Clause::Equals(StationField::Planetary, planetary.into()));
        }

        if let Some(names) = params::list(self.controllingfactionname.as_deref()) {
            let mut factions = Filter::new();
            factions.any_of(FactionField::NameLower, Some(names));

            lookups.push(Lookup {
                constrains: StationField::ControllingFactionId,
                source: LookupSource::FactionIds(factions),
            });
        }

        let mut systems = Filter::new();
        if let Some(permit) = params::optional_flag(self.permit.as_deref()) {
            systems.push(Clause::Equals(SystemField::NeedsPermit, permit.into()));
        }
        systems.any_of(SystemField::Power, params::list(self.power.as_deref()));
        systems.any_of(
            SystemField::PowerState,
            params::list(self.powerstatename.as_deref()),
        );

        if !systems.is_empty() {
            lookups.push(Lookup {
                constrains: StationField::SystemLower,
                source: LookupSource::SystemNames(systems),
            });
        }

        Ok((filter, lookups))
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
}
