//! HTTP controller endpoints for the BGS ledger API.
//!
//! Axum handlers for entity listings, user management, community views and admin
//! utilities. Controllers resolve the caller from the session, delegate to a service and
//! serialize the result. Every handler carries a utoipa path for the OpenAPI document.

pub mod admin;
pub mod community;
pub mod faction;
pub mod station;
pub mod system;
pub mod user;
pub mod util;
