//! Water log fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::water_log;

use crate::fixture::user::default_instant;

/// Default amount in ml.
pub const DEFAULT_AMOUNT: i32 = 250;

/// Creates a water log entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - user_id: `1`
/// - amount: `250`
/// - note: `None`
/// - created_at: [`default_instant`]
pub fn entity() -> water_log::Model {
    entity_builder().build()
}

/// Creates a water log entity builder for customization.
pub fn entity_builder() -> WaterLogEntityBuilder {
    WaterLogEntityBuilder::default()
}

/// Builder for creating customized water log entity models.
pub struct WaterLogEntityBuilder {
    id: i32,
    user_id: i32,
    amount: i32,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl Default for WaterLogEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            user_id: 1,
            amount: DEFAULT_AMOUNT,
            note: None,
            created_at: default_instant(),
        }
    }
}

impl WaterLogEntityBuilder {
    /// Sets the log ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning user ID.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
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

    /// Sets the creation instant.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and returns the water log entity model.
    pub fn build(self) -> water_log::Model {
        water_log::Model {
            id: self.id,
            user_id: self.user_id,
            amount: self.amount,
            note: self.note,
            created_at: self.created_at,
        }
    }
}
