//! Database model type aliases.
//!
//! Convenient aliases for the sea-orm models used throughout the server, so signatures
//! don't need to spell out the `entity` crate paths.

/// A faction record with its `name_lower` shadow column.
pub type FactionModel = entity::faction::Model;

/// A faction's live status in one system. The system is referenced by lowercase name.
pub type FactionPresenceModel = entity::faction_presence::Model;

/// An active, pending or recovering state on a presence record.
///
/// # Fields (from `entity::faction_presence_state::Model`)
/// - `presence_id` - Presence the state belongs to
/// - `faction_id` - Owning faction, denormalized for filtering
/// - `kind` - One of `active`, `pending` or `recovering`
/// - `state` - State name, lowercase
/// - `trend` - Optional trend indicator
pub type FactionPresenceStateModel = entity::faction_presence_state::Model;

/// Immutable faction snapshot.
pub type FactionHistoryModel = entity::faction_history::Model;

/// A system record.
pub type SystemModel = entity::system::Model;

/// A faction referenced by a system, by lowercase name.
pub type SystemFactionModel = entity::system_faction::Model;

/// Immutable system snapshot.
pub type SystemHistoryModel = entity::system_history::Model;

/// A station record with its service flags.
pub type StationModel = entity::station::Model;

/// Immutable station snapshot.
pub type StationHistoryModel = entity::station_history::Model;

/// A dashboard user. Access level 0 is the administrator level.
pub type UserModel = entity::bgs_user::Model;

/// A donation made by a user.
pub type UserDonationModel = entity::bgs_user_donation::Model;
