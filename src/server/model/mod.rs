//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data boundary; services
//! work only with them; controllers convert them into DTOs for responses.

pub mod report;
pub mod user;
pub mod water_log;
