//! Server application core modules.
//!
//! This module contains all server-side functionality for the BGS ledger: HTTP routing,
//! the query builder translating request parameters into typed database filters,
//! pagination, history joining, cross-reference resolution, user administration and
//! maintenance scripts.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod query;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
