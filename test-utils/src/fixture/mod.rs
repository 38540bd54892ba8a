//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests of pure logic (report
//! bucketing, domain conversion). Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//!
//! let log = fixture::water_log::entity_builder()
//!     .amount(330)
//!     .build();
//! ```

pub mod user;
pub mod water_log;

pub use user::{entity as user_entity, entity_builder as user_entity_builder};
pub use water_log::{entity as water_log_entity, entity_builder as water_log_entity_builder};
