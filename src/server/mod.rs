//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: API endpoints, the daily reset and
//! aggregation logic, data access, and infrastructure. The backend uses Axum as the web
//! framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, authentication, and DTO conversion
//! - **Service Layer** (`service/`) - Reset evaluation, intake mutations and report assembly
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard and validated JSON extractor
//! - **Util** (`util/`) - Fixed-offset local time frame and query parsing
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, token service)
//! - **Startup** (`startup`) - Database connection, migrations, CORS and shutdown signal
//! - **Router** (`router`) - Route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the controller
//! 2. **Controller** resolves the user through `AuthGuard` and validates the body
//! 3. **Service** applies the daily reset where needed and executes business logic
//! 4. **Data** queries the database, converting entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
