//! Intake log domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::water::{AddWaterDto, WaterLogDto};

/// One immutable water-consumption event.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterLog {
    pub id: i32,
    /// Owning user.
    pub user_id: i32,
    /// Amount in ml, always positive.
    pub amount: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WaterLog {
    /// Converts an entity model to a water log domain model at the repository boundary.
    pub fn from_entity(entity: entity::water_log::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            amount: entity.amount,
            note: entity.note,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> WaterLogDto {
        WaterLogDto {
            id: self.id,
            user_id: self.user_id,
            amount: self.amount,
            note: self.note,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording a new intake log.
#[derive(Debug, Clone)]
pub struct CreateWaterLogParam {
    pub user_id: i32,
    pub amount: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CreateWaterLogParam {
    /// Builds the insert parameters from a validated request body.
    ///
    /// Blank notes are stored as `None`.
    ///
    /// # Arguments
    /// - `user_id` - Authenticated user the log belongs to
    /// - `dto` - Validated request body
    /// - `now` - Creation instant of the log
    pub fn from_dto(user_id: i32, dto: AddWaterDto, now: DateTime<Utc>) -> Self {
        let note = dto
            .note
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());

        Self {
            user_id,
            amount: dto.amount,
            note,
            created_at: now,
        }
    }
}

/// Result of adding or deleting a log: the affected log and the updated running total.
#[derive(Debug, Clone)]
pub struct IntakeChange {
    pub log: WaterLog,
    pub new_total: i32,
}
