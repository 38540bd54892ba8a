//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored as the password hash when a test does not care about login.
pub const DEFAULT_PASSWORD_HASH: &str = "not-a-real-hash";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .name("Ayse")
///     .daily_water_goal(3000)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    daily_water_goal: i32,
    current_water_intake: i32,
    last_reset_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password_hash: [`DEFAULT_PASSWORD_HASH`]
    /// - daily_water_goal: `2000`
    /// - current_water_intake: `0`
    /// - last_reset_date / created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
            daily_water_goal: 2000,
            current_water_intake: 0,
            last_reset_date: now,
            created_at: now,
        }
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email address for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    ///
    /// # Arguments
    /// - `password_hash` - PHC formatted hash, e.g. produced by the application's hasher
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the daily water goal in ml.
    pub fn daily_water_goal(mut self, goal: i32) -> Self {
        self.daily_water_goal = goal;
        self
    }

    /// Sets the denormalized running total in ml.
    pub fn current_water_intake(mut self, intake: i32) -> Self {
        self.current_water_intake = intake;
        self
    }

    /// Sets the instant of the last counter reset.
    ///
    /// # Arguments
    /// - `last_reset_date` - UTC instant, e.g. yesterday to force a reset
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_reset_date(mut self, last_reset_date: DateTime<Utc>) -> Self {
        self.last_reset_date = last_reset_date;
        self
    }

    /// Sets the creation instant.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            daily_water_goal: ActiveValue::Set(self.daily_water_goal),
            current_water_intake: ActiveValue::Set(self.current_water_intake),
            last_reset_date: ActiveValue::Set(self.last_reset_date),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
