//! User fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::user;

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test User";

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "test@example.com";

/// Default daily goal in ml.
pub const DEFAULT_DAILY_WATER_GOAL: i32 = 2000;

/// Fixed instant used for every timestamp so fixtures are deterministic.
///
/// 2025-06-15 09:00:00 UTC, i.e. 12:00 local (UTC+3) on a Sunday.
pub fn default_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test User"`
/// - email: `"test@example.com"`
/// - daily_water_goal: `2000`
/// - current_water_intake: `0`
/// - timestamps: [`default_instant`]
///
/// # Returns
/// - `user::Model` - In-memory user entity
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let user = fixture::user::entity_builder()
///     .current_water_intake(750)
///     .build();
/// ```
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    name: String,
    email: String,
    daily_water_goal: i32,
    current_water_intake: i32,
    last_reset_date: DateTime<Utc>,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            daily_water_goal: DEFAULT_DAILY_WATER_GOAL,
            current_water_intake: 0,
            last_reset_date: default_instant(),
        }
    }
}

impl UserEntityBuilder {
    /// Sets the user ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the daily goal in ml.
    pub fn daily_water_goal(mut self, goal: i32) -> Self {
        self.daily_water_goal = goal;
        self
    }

    /// Sets the running total in ml.
    pub fn current_water_intake(mut self, intake: i32) -> Self {
        self.current_water_intake = intake;
        self
    }

    /// Sets the instant of the last counter reset.
    pub fn last_reset_date(mut self, last_reset_date: DateTime<Utc>) -> Self {
        self.last_reset_date = last_reset_date;
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            name: self.name,
            email: self.email,
            password_hash: crate::factory::user::DEFAULT_PASSWORD_HASH.to_string(),
            daily_water_goal: self.daily_water_goal,
            current_water_intake: self.current_water_intake,
            last_reset_date: self.last_reset_date,
            created_at: default_instant(),
            updated_at: default_instant(),
        }
    }
}
