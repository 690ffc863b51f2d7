//! Service layer for listing, enrichment and administration.
//!
//! Listing services turn parsed query parameters into a filtered, paginated page of
//! base rows, then enrich it with history and cross-referenced entities. The user,
//! community and admin services back the dashboard endpoints.

pub mod admin;
pub mod community;
pub mod faction;
pub mod history;
pub mod pagination;
pub mod resolve;
pub mod station;
pub mod system;
pub mod user;
