use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{reference::Reference, system::SystemLinkDto};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FacilitiesDto {
    pub has_market: bool,
    pub has_blackmarket: bool,
    pub has_refuel: bool,
    pub has_repair: bool,
    pub has_rearm: bool,
    pub has_outfitting: bool,
    pub has_shipyard: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StationDto {
    pub id: i32,
    pub eddb_id: Option<i64>,
    pub name: String,
    pub name_lower: String,
    #[serde(rename = "type")]
    pub station_type: String,
    pub system: String,
    pub system_lower: String,
    pub government: String,
    pub economy: String,
    pub allegiance: String,
    pub state: String,
    pub distance_from_star: Option<f64>,
    pub max_landing_pad_size: Option<String>,
    pub is_planetary: bool,
    pub controlling_minor_faction: Option<String>,
    pub controlling_minor_faction_id: Option<i32>,
    pub facilities: FacilitiesDto,
    pub services: Vec<String>,
    pub selling_ships: Vec<String>,
    pub export_commodities: Vec<String>,
    pub selling_modules: Vec<i64>,
    pub updated_at: NaiveDateTime,
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub system_ref: Reference<SystemLinkDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<StationHistoryDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_error: Option<String>,
}

/// A station snapshot, without the owning station's identifiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StationHistoryDto {
    pub government: String,
    pub economy: String,
    pub allegiance: String,
    pub state: String,
    pub controlling_minor_faction: Option<String>,
    pub services: Vec<String>,
    pub updated_at: NaiveDateTime,
    pub updated_by: String,
}
