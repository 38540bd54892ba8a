//! Water log factory for creating test intake log entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test water logs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::water_log::WaterLogFactory;
///
/// let log = WaterLogFactory::new(&db, user.id)
///     .amount(330)
///     .created_at(yesterday)
///     .build()
///     .await?;
/// ```
pub struct WaterLogFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    amount: i32,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> WaterLogFactory<'a> {
    /// Creates a new WaterLogFactory with default values.
    ///
    /// Defaults:
    /// - amount: `250`
    /// - note: `None`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the owning user
    ///
    /// # Returns
    /// - `WaterLogFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            amount: 250,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the amount in ml.
    pub fn amount(mut self, amount: i32) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the optional note.
    pub fn note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Sets the creation instant used for window queries.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the water log entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::water_log::Model)` - Created log entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::water_log::Model, DbErr> {
        entity::water_log::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            amount: ActiveValue::Set(self.amount),
            note: ActiveValue::Set(self.note),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a water log for `user_id` with the given amount, stamped now.
pub async fn create_water_log(
    db: &DatabaseConnection,
    user_id: i32,
    amount: i32,
) -> Result<entity::water_log::Model, DbErr> {
    WaterLogFactory::new(db, user_id).amount(amount).build().await
}

/// Creates a water log for `user_id` at a specific instant.
pub async fn create_water_log_at(
    db: &DatabaseConnection,
    user_id: i32,
    amount: i32,
    created_at: DateTime<Utc>,
) -> Result<entity::water_log::Model, DbErr> {
    WaterLogFactory::new(db, user_id)
        .amount(amount)
        .created_at(created_at)
        .build()
        .await
}
