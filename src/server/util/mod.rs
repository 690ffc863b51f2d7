//! Utility functions and helpers for server operations.
//!
//! Reusable helpers shared across services: epoch-millisecond time conversions used by
//! history windows, and the settled task group used to run independent queries
//! concurrently while keeping each branch's outcome.

pub mod settle;
pub mod time;
