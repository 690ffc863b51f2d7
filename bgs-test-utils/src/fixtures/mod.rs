//! Database fixtures for test execution.
//!
//! - `factory` - Fully populated active models that tests can tweak before inserting
//! - `faction`, `system`, `station`, `user` - Insert helpers reachable from `TestContext`

pub mod factory;
pub mod faction;
pub mod station;
pub mod system;
pub mod user;
