//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application
//! state, the identity of the calling user, database model type aliases and session
//! data structures.

pub mod app;
pub mod caller;
pub mod db;
pub mod session;
