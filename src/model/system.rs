use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{faction::StateDto, reference::Reference};

/// Minimal link to a system from another entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SystemLinkDto {
    pub id: i32,
    pub population: i64,
    /// Whether the referencing faction controls the system
    pub controlling: bool,
}

/// System fields attached to a faction presence on request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SystemSummaryDto {
    pub id: i32,
    pub name: String,
    pub allegiance: String,
    pub government: String,
    pub state: String,
    pub primary_economy: String,
    pub secondary_economy: Option<String>,
    pub security: String,
    pub population: i64,
    pub controlling_minor_faction: Option<String>,
    pub power: Option<String>,
    pub power_state: Option<String>,
    pub needs_permit: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SystemDto {
    pub id: i32,
    pub eddb_id: Option<i64>,
    pub name: String,
    pub name_lower: String,
    pub allegiance: String,
    pub government: String,
    pub state: String,
    pub primary_economy: String,
    pub secondary_economy: Option<String>,
    pub security: String,
    pub population: i64,
    pub controlling_minor_faction: Option<String>,
    pub power: Option<String>,
    pub power_state: Option<String>,
    pub needs_permit: bool,
    pub updated_at: NaiveDateTime,
    pub factions: Vec<SystemFactionDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<SystemHistoryDto>>,
    /// Faction snapshots recorded in this system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_history: Option<Vec<SystemFactionHistoryDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_error: Option<String>,
}

/// A faction named by a system, resolved against the faction table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SystemFactionDto {
    pub name: String,
    pub name_lower: String,
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub faction_ref: Reference<FactionLinkDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FactionLinkDto {
    pub id: i32,
    /// The faction's live presence in the referencing system, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<PresenceSnapshotDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PresenceSnapshotDto {
    pub influence: f64,
    pub state: String,
    pub active_states: Vec<StateDto>,
    pub pending_states: Vec<StateDto>,
    pub recovering_states: Vec<StateDto>,
    pub updated_at: NaiveDateTime,
}

/// A system snapshot, without the owning system's identifiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SystemHistoryDto {
    pub allegiance: String,
    pub government: String,
    pub state: String,
    pub security: String,
    pub population: i64,
    pub controlling_minor_faction: Option<String>,
    pub factions: Vec<SystemFactionDto>,
    pub updated_at: NaiveDateTime,
    pub updated_by: String,
}

/// A faction snapshot recorded in a system, keyed by the faction's lowercase name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SystemFactionHistoryDto {
    pub faction: String,
    pub state: String,
    pub influence: f64,
    pub active_states: Vec<StateDto>,
    pub pending_states: Vec<StateDto>,
    pub recovering_states: Vec<StateDto>,
    pub updated_at: NaiveDateTime,
    pub updated_by: String,
}
