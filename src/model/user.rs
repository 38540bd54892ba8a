use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Lowest daily goal a user may set, in ml.
pub const MIN_DAILY_WATER_GOAL: i32 = 500;

/// Highest daily goal a user may set, in ml.
pub const MAX_DAILY_WATER_GOAL: i32 = 10_000;

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
pub struct RegisterUserDto {
    #[validate(
        length(max = 100, message = "Name must be at most 100 characters"),
        custom(function = "validate_not_blank", message = "Name is required")
    )]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
pub struct LoginDto {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub daily_water_goal: i32,
    pub current_water_intake: i32,
}

/// Response of a successful registration or login.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AuthResponseDto {
    pub message: String,
    pub token: String,
    pub user: UserSummaryDto,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub daily_water_goal: i32,
    pub current_water_intake: i32,
    pub last_reset_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row of the intake leaderboard.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    pub id: i32,
    pub name: String,
    pub current_water_intake: i32,
    pub daily_water_goal: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
pub struct UpdateGoalDto {
    #[validate(range(
        min = MIN_DAILY_WATER_GOAL,
        max = MAX_DAILY_WATER_GOAL,
        message = "Goal must be between 500 and 10000 ml"
    ))]
    pub goal: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponseDto {
    pub message: String,
    pub daily_water_goal: i32,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
