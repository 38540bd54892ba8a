use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, WaterLog};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(WaterLog)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Use a temporary database file instead of an in-memory database.
    on_disk: bool,

    /// Run the application's migrations before creating `tables`.
    migrations: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            on_disk: false,
            migrations: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table needed for intake tracking: `User` followed by `WaterLog`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_intake_tables(self) -> Self {
        self.with_table(User).with_table(WaterLog)
    }

    /// Builds the schema by running the application's migrations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Backs the test database with a temporary file and a multi-connection pool.
    ///
    /// Needed when a test must have transactions overlap on separate connections.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn on_disk(mut self) -> Self {
        self.on_disk = true;
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = if self.on_disk {
            TestContext::on_disk()
        } else {
            TestContext::new()
        };

        if self.migrations {
            setup.with_migrations().await?;
        }
        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
