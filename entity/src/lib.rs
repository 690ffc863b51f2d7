//! Database entities for the BGS ledger.
//!
//! Factions, systems and stations each carry a `name_lower` shadow column that mirrors
//! `name` in lowercase; cross-entity references are stored as lowercase names and
//! resolved at read time.

pub mod prelude;

pub mod bgs_user;
pub mod bgs_user_donation;
pub mod bgs_user_faction;
pub mod bgs_user_system;
pub mod faction;
pub mod faction_history;
pub mod faction_presence;
pub mod faction_presence_state;
pub mod json;
pub mod station;
pub mod station_commodity;
pub mod station_history;
pub mod station_module;
pub mod station_service;
pub mod station_ship;
pub mod system;
pub mod system_faction;
pub mod system_history;
