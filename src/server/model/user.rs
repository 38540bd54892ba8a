//! User domain models and parameters.
//!
//! Provides the domain model for a registered account together with its daily goal and
//! denormalized running total. The password hash is kept out of [`User`] and only surfaces
//! through [`UserCredentials`] during login.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{LeaderboardEntryDto, ProfileDto, RegisterUserDto, UserSummaryDto},
    server::util::time::should_reset,
};

/// Daily goal assigned to new accounts, in ml.
pub const DEFAULT_DAILY_WATER_GOAL: i32 = 2000;

/// Registered user with goal and running intake total.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Auto-incremented user ID.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Unique login email.
    pub email: String,
    /// Daily target in ml.
    pub daily_water_goal: i32,
    /// Sum of today's logs in ml as of `last_reset_date`'s local day.
    pub current_water_intake: i32,
    /// Instant the running total was last zeroed.
    pub last_reset_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted domain model, without the password hash
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            daily_water_goal: entity.daily_water_goal,
            current_water_intake: entity.current_water_intake,
            last_reset_date: entity.last_reset_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Running total as it should be reported at `now`.
    ///
    /// Returns 0 when the stored counter belongs to an earlier local day, without
    /// writing anything. Used where resets are not persisted, such as the leaderboard.
    pub fn effective_intake(&self, now: DateTime<Utc>) -> i32 {
        if should_reset(self.last_reset_date, now) {
            0
        } else {
            self.current_water_intake
        }
    }

    /// Converts the user to the short summary returned by register and login.
    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            email: self.email,
            daily_water_goal: self.daily_water_goal,
            current_water_intake: self.current_water_intake,
        }
    }

    pub fn into_profile_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            name: self.name,
            email: self.email,
            daily_water_goal: self.daily_water_goal,
            current_water_intake: self.current_water_intake,
            last_reset_date: self.last_reset_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts the user to a leaderboard row, reporting the intake effective at `now`.
    pub fn into_leaderboard_dto(self, now: DateTime<Utc>) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            current_water_intake: self.effective_intake(now),
            id: self.id,
            name: self.name,
            daily_water_goal: self.daily_water_goal,
            created_at: self.created_at,
        }
    }
}

/// A user paired with their stored password hash, only loaded for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    /// PHC formatted argon2 hash.
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for inserting a newly registered user.
///
/// The password must already be hashed. `now` seeds `last_reset_date`, `created_at`
/// and `updated_at`.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub daily_water_goal: i32,
    pub now: DateTime<Utc>,
}

/// Registration input after validation, with the password still in plain text.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParam {
    /// Builds the parameters from a validated request body, trimming name and email.
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}

/// A user who just registered or logged in, with a freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}
