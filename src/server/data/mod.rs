//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Every repository is
//! generic over `ConnectionTrait` so services can run several operations in one
//! transaction.

pub mod user;
pub mod water_log;

#[cfg(test)]
mod test;
