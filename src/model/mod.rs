//! API data transfer objects.
//!
//! These types define the JSON shapes exchanged with clients. Field names are serialized
//! in camelCase. Request DTOs derive `Validate` so controllers can reject malformed input
//! field-by-field before any service runs.

pub mod api;
pub mod report;
pub mod user;
pub mod water;
