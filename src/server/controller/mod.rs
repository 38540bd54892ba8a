//! HTTP handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into domain parameters, call a
//! service with the current instant and convert the result back into a DTO.

pub mod auth;
pub mod report;
pub mod user;
pub mod water;

/// Name of the bearer token security scheme in the OpenAPI document.
pub static BEARER_SECURITY: &str = "bearer_auth";
