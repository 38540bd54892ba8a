use std::path::PathBuf;

use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};

use crate::{error::TestError, factory::helpers::next_id};

/// Pool size for file-backed databases, large enough for writers to contend.
const ON_DISK_MAX_CONNECTIONS: u32 = 8;

/// Test context containing the database connection.
///
/// Provides an in-memory SQLite database connection for isolated unit and integration
/// testing, or a temporary database file when several pooled connections are needed.
/// The database is created lazily on first access and lives as long as the context.
pub struct TestContext {
    /// Optional database connection to the test SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// Database file for file-backed contexts, removed on drop.
    path: Option<PathBuf>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a new empty test context with no database connection.
    pub fn new() -> Self {
        Self { db: None, path: None }
    }

    /// Creates a context backed by a fresh file in the system temp directory.
    ///
    /// In-memory SQLite pools hold a single connection, so transactions never overlap.
    /// A file-backed pool opens several connections that contend for the write lock.
    pub fn on_disk() -> Self {
        let path = std::env::temp_dir().join(format!(
            "hydration-test-{}-{}.db",
            std::process::id(),
            next_id()
        ));

        Self {
            db: None,
            path: Some(path),
        }
    }

    /// Gets or creates the SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = match &self.path {
                    Some(path) => {
                        let mut opt =
                            ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
                        opt.max_connections(ON_DISK_MAX_CONNECTIONS)
                            .sqlx_logging(false);
                        Database::connect(opt).await?
                    }
                    None => Database::connect("sqlite::memory:").await?,
                };

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Runs the application's migrations against the database.
    ///
    /// # Returns
    /// - `Ok(())` - Schema matches the production schema
    /// - `Err(TestError::Database)` - A migration failed
    pub async fn with_migrations(&mut self) -> Result<(), TestError> {
        use migration::{Migrator, MigratorTrait};

        let db = self.database().await?;
        Migrator::up(db, None).await?;

        Ok(())
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(path) = &self.path {
            for suffix in ["", "-wal", "-shm", "-journal"] {
                let mut file = path.clone().into_os_string();
                file.push(suffix);
                let _ = std::fs::remove_file(file);
            }
        }
    }
}
