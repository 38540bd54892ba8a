//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Both fields are cheap to clone: the database
//! connection is a pool handle and the token service only holds key material.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies bearer tokens.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    /// - `tokens` - Token service configured with the JWT secret and lifetime
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
