//! Utility functions for controller request handling.
//!
//! Resolves the session into a [`Caller`](crate::server::model::caller::Caller) for
//! public and signed-in endpoints.

pub mod caller;
