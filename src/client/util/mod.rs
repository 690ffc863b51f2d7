pub mod api;
pub mod listing;
