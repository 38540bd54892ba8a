//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Daily reset rule, ownership checks and report assembly
//! - **Orchestration**: Coordinating repository calls, inside a transaction where needed
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services take the current instant as a parameter so date-sensitive behavior can be
//! tested at fixed points in time.

pub mod auth;
pub mod intake;
pub mod report;
pub mod user;
