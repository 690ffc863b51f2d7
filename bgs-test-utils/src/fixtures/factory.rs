//! Factories for active models populated with standard test values.
//!
//! Every factory sets all non-key columns, so the result can be inserted as is or
//! adjusted field by field first.

use chrono::{DateTime, NaiveDateTime};
use entity::json::{FactionName, FactionNameList, NameList, StateList};
use sea_orm::ActiveValue;

/// Timestamp every fixture uses unless told otherwise: 2020-09-13T12:26:40Z.
pub const FIXED_MILLIS: i64 = 1_600_000_000_000;

/// Converts epoch milliseconds into a naive UTC timestamp.
pub fn at(millis: i64) -> NaiveDateTime {
    DateTime::from_timestamp_millis(millis)
        .expect("timestamp in range")
        .naive_utc()
}

pub fn fixed_time() -> NaiveDateTime {
    at(FIXED_MILLIS)
}

pub fn faction(name: &str) -> entity::faction::ActiveModel {
    entity::faction::ActiveModel {
        eddb_id: ActiveValue::Set(None),
        name: ActiveValue::Set(name.to_string()),
        name_lower: ActiveValue::Set(name.to_lowercase()),
        allegiance: ActiveValue::Set("federation".to_string()),
        government: ActiveValue::Set("democracy".to_string()),
        is_player_faction: ActiveValue::Set(false),
        home_system_name: ActiveValue::Set(None),
        updated_at: ActiveValue::Set(fixed_time()),
        ..Default::default()
    }
}

pub fn presence(
    faction_id: i32,
    system_name: &str,
    influence: f64,
) -> entity::faction_presence::ActiveModel {
    entity::faction_presence::ActiveModel {
        faction_id: ActiveValue::Set(faction_id),
        system_name: ActiveValue::Set(system_name.to_string()),
        system_name_lower: ActiveValue::Set(system_name.to_lowercase()),
        influence: ActiveValue::Set(influence),
        state: ActiveValue::Set("none".to_string()),
        updated_at: ActiveValue::Set(fixed_time()),
        ..Default::default()
    }
}

pub fn faction_history(
    faction: &entity::faction::Model,
    system_name: &str,
    updated_at: NaiveDateTime,
) -> entity::faction_history::ActiveModel {
    entity::faction_history::ActiveModel {
        faction_id: ActiveValue::Set(faction.id),
        faction_name: ActiveValue::Set(faction.name.clone()),
        faction_name_lower: ActiveValue::Set(faction.name_lower.clone()),
        system: ActiveValue::Set(system_name.to_string()),
        system_lower: ActiveValue::Set(system_name.to_lowercase()),
        state: ActiveValue::Set("none".to_string()),
        influence: ActiveValue::Set(0.5),
        active_states: ActiveValue::Set(StateList::default()),
        pending_states: ActiveValue::Set(StateList::default()),
        recovering_states: ActiveValue::Set(StateList::default()),
        updated_at: ActiveValue::Set(updated_at),
        updated_by: ActiveValue::Set("test".to_string()),
        ..Default::default()
    }
}

pub fn system(name: &str) -> entity::system::ActiveModel {
    entity::system::ActiveModel {
        eddb_id: ActiveValue::Set(None),
        name: ActiveValue::Set(name.to_string()),
        name_lower: ActiveValue::Set(name.to_lowercase()),
        allegiance: ActiveValue::Set("federation".to_string()),
        government: ActiveValue::Set("democracy".to_string()),
        state: ActiveValue::Set("none".to_string()),
        primary_economy: ActiveValue::Set("industrial".to_string()),
        secondary_economy: ActiveValue::Set(None),
        security: ActiveValue::Set("high".to_string()),
        population: ActiveValue::Set(1_000_000),
        controlling_minor_faction: ActiveValue::Set(None),
        power: ActiveValue::Set(None),
        power_state: ActiveValue::Set(None),
        needs_permit: ActiveValue::Set(false),
        updated_at: ActiveValue::Set(fixed_time()),
        ..Default::default()
    }
}

pub fn system_history(
    system: &entity::system::Model,
    faction_names: &[&str],
    updated_at: NaiveDateTime,
) -> entity::system_history::ActiveModel {
    let factions = faction_names
        .iter()
        .map(|name| FactionName {
            name: name.to_string(),
            name_lower: name.to_lowercase(),
        })
        .collect();

    entity::system_history::ActiveModel {
        system_id: ActiveValue::Set(system.id),
        system_name_lower: ActiveValue::Set(system.name_lower.clone()),
        allegiance: ActiveValue::Set(system.allegiance.clone()),
        government: ActiveValue::Set(system.government.clone()),
        state: ActiveValue::Set(system.state.clone()),
        security: ActiveValue::Set(system.security.clone()),
        population: ActiveValue::Set(system.population),
        controlling_minor_faction: ActiveValue::Set(system.controlling_minor_faction.clone()),
        factions: ActiveValue::Set(FactionNameList(factions)),
        updated_at: ActiveValue::Set(updated_at),
        updated_by: ActiveValue::Set("test".to_string()),
        ..Default::default()
    }
}

pub fn station(name: &str, system_name: &str) -> entity::station::ActiveModel {
    entity::station::ActiveModel {
        eddb_id: ActiveValue::Set(None),
        name: ActiveValue::Set(name.to_string()),
        name_lower: ActiveValue::Set(name.to_lowercase()),
        station_type: ActiveValue::Set("coriolis".to_string()),
        system: ActiveValue::Set(system_name.to_string()),
        system_lower: ActiveValue::Set(system_name.to_lowercase()),
        government: ActiveValue::Set("democracy".to_string()),
        economy: ActiveValue::Set("industrial".to_string()),
        allegiance: ActiveValue::Set("federation".to_string()),
        state: ActiveValue::Set("none".to_string()),
        distance_from_star: ActiveValue::Set(Some(500.0)),
        max_landing_pad_size: ActiveValue::Set(Some("l".to_string())),
        is_planetary: ActiveValue::Set(false),
        controlling_minor_faction: ActiveValue::Set(None),
        controlling_minor_faction_id: ActiveValue::Set(None),
        has_market: ActiveValue::Set(false),
        has_blackmarket: ActiveValue::Set(false),
        has_refuel: ActiveValue::Set(false),
        has_repair: ActiveValue::Set(false),
        has_rearm: ActiveValue::Set(false),
        has_outfitting: ActiveValue::Set(false),
        has_shipyard: ActiveValue::Set(false),
        updated_at: ActiveValue::Set(fixed_time()),
        ..Default::default()
    }
}

pub fn station_history(
    station: &entity::station::Model,
    updated_at: NaiveDateTime,
) -> entity::station_history::ActiveModel {
    entity::station_history::ActiveModel {
        station_id: ActiveValue::Set(station.id),
        station_name_lower: ActiveValue::Set(station.name_lower.clone()),
        government: ActiveValue::Set(station.government.clone()),
        economy: ActiveValue::Set(station.economy.clone()),
        allegiance: ActiveValue::Set(station.allegiance.clone()),
        state: ActiveValue::Set(station.state.clone()),
        controlling_minor_faction: ActiveValue::Set(station.controlling_minor_faction.clone()),
        services: ActiveValue::Set(NameList::default()),
        updated_at: ActiveValue::Set(updated_at),
        updated_by: ActiveValue::Set("test".to_string()),
        ..Default::default()
    }
}

pub fn user(discord_id: &str, username: &str, access: i32) -> entity::bgs_user::ActiveModel {
    entity::bgs_user::ActiveModel {
        discord_id: ActiveValue::Set(discord_id.to_string()),
        username: ActiveValue::Set(username.to_string()),
        discriminator: ActiveValue::Set("0001".to_string()),
        avatar: ActiveValue::Set(None),
        access: ActiveValue::Set(access),
        os_contribution: ActiveValue::Set(0),
        patronage_level: ActiveValue::Set(0),
        patronage_since: ActiveValue::Set(None),
        created_at: ActiveValue::Set(fixed_time()),
        ..Default::default()
    }
}
