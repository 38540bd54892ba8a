use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the test database, migrate it or create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
