pub mod factions;
pub mod home;
pub mod not_found;
pub mod stations;
pub mod systems;

pub use factions::Factions;
pub use home::Home;
pub use not_found::NotFound;
pub use stations::Stations;
pub use systems::Systems;
