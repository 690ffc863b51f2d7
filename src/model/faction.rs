use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    reference::Reference,
    system::{SystemLinkDto, SystemSummaryDto},
};

/// A faction state and its trend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StateDto {
    pub state: String,
    pub trend: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FactionDto {
    pub id: i32,
    pub eddb_id: Option<i64>,
    pub name: String,
    pub name_lower: String,
    pub allegiance: String,
    pub government: String,
    pub is_player_faction: bool,
    pub home_system_name: Option<String>,
    pub updated_at: NaiveDateTime,
    /// Omitted for minimal listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_presence: Option<Vec<FactionPresenceDto>>,
    /// Present when history was requested and fetched successfully
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<FactionHistoryDto>>,
    /// Present when history was requested but could not be fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_error: Option<String>,
}

/// A faction's live status within one system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FactionPresenceDto {
    pub system_name: String,
    pub system_name_lower: String,
    pub influence: f64,
    pub state: String,
    pub active_states: Vec<StateDto>,
    pub pending_states: Vec<StateDto>,
    pub recovering_states: Vec<StateDto>,
    pub updated_at: NaiveDateTime,
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub system_ref: Reference<SystemLinkDto>,
    /// Full system summary, only when system details were requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_details: Option<SystemSummaryDto>,
}

/// A faction snapshot, without the owning faction's identifiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FactionHistoryDto {
    pub system: String,
    pub system_lower: String,
    pub state: String,
    pub influence: f64,
    pub active_states: Vec<StateDto>,
    pub pending_states: Vec<StateDto>,
    pub recovering_states: Vec<StateDto>,
    pub updated_at: NaiveDateTime,
    pub updated_by: String,
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub system_ref: Reference<SystemLinkDto>,
}
