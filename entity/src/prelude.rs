pub use super::bgs_user::Entity as BgsUser;
pub use super::bgs_user_donation::Entity as BgsUserDonation;
pub use super::bgs_user_faction::Entity as BgsUserFaction;
pub use super::bgs_user_system::Entity as BgsUserSystem;
pub use super::faction::Entity as Faction;
pub use super::faction_history::Entity as FactionHistory;
pub use super::faction_presence::Entity as FactionPresence;
pub use super::faction_presence_state::Entity as FactionPresenceState;
pub use super::station::Entity as Station;
pub use super::station_commodity::Entity as StationCommodity;
pub use super::station_history::Entity as StationHistory;
pub use super::station_module::Entity as StationModule;
pub use super::station_service::Entity as StationService;
pub use super::station_ship::Entity as StationShip;
pub use super::system::Entity as System;
pub use super::system_faction::Entity as SystemFaction;
pub use super::system_history::Entity as SystemHistory;
