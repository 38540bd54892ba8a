use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Largest amount accepted for a single intake log, in ml.
pub const MAX_LOG_AMOUNT: i32 = 10_000;

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
pub struct AddWaterDto {
    #[validate(range(
        min = 1,
        max = MAX_LOG_AMOUNT,
        message = "Amount must be between 1 and 10000 ml"
    ))]
    pub amount: i32,
    #[validate(length(max = 255, message = "Note must be at most 255 characters"))]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterLogDto {
    pub id: i32,
    pub user_id: i32,
    pub amount: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddWaterResponseDto {
    pub message: String,
    pub water_log: WaterLogDto,
    pub new_total: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWaterResponseDto {
    pub message: String,
    pub new_total: i32,
}
