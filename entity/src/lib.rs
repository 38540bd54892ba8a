//! SeaORM entity models for the hydration tracker database.
//!
//! Entities map one-to-one onto the tables created by the `migration` crate.

pub mod prelude;
pub mod user;
pub mod water_log;
