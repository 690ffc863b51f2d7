//! Query builder.
//!
//! Translates HTTP query parameters into typed [`filter::Filter`]s over entity fields,
//! including cross-collection constraints that must first be resolved against another
//! table (see [`lookup`]).

pub mod faction;
pub mod filter;
pub mod history;
pub mod lookup;
pub mod params;
pub mod station;
pub mod system;
pub mod user;
