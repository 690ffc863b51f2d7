//! Data transfer objects shared by the API server and the web client.

pub mod admin;
pub mod api;
pub mod community;
pub mod faction;
pub mod ingame_ids;
pub mod reference;
pub mod station;
pub mod system;
pub mod user;
