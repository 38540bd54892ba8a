use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::{GoalResponseDto, LeaderboardEntryDto, ProfileDto, UpdateGoalDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidatedJson},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the authenticated user's profile.
///
/// Applies the daily reset first, so the returned intake is always today's.
///
/// # Returns
/// - `200 OK` - Profile of the authenticated user
/// - `401 Unauthorized` / `403 Forbidden` / `404 Not Found` - Token missing, invalid or
///   for a deleted user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User profile", body = ProfileDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let user = UserService::new(&state.db)
        .get_profile(user, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(user.into_profile_dto())))
}

/// Set the authenticated user's daily goal.
///
/// # Returns
/// - `200 OK` - Goal updated
/// - `400 Bad Request` - Goal outside 500-10000 ml
/// - `401 Unauthorized` / `403 Forbidden` - Token missing or invalid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/goal",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = UpdateGoalDto,
    responses(
        (status = 200, description = "Goal updated", body = GoalResponseDto),
        (status = 400, description = "Goal out of range", body = ValidationErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<UpdateGoalDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let user = UserService::new(&state.db)
        .update_goal(&user, payload.goal, Utc::now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(GoalResponseDto {
            message: "Goal updated successfully".to_string(),
            daily_water_goal: user.daily_water_goal,
        }),
    ))
}

/// List all users ranked by today's intake.
///
/// Users who have not logged anything today are listed with an intake of 0.
///
/// # Returns
/// - `200 OK` - Leaderboard, highest intake first
/// - `401 Unauthorized` / `403 Forbidden` - Token missing or invalid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Leaderboard", body = Vec<LeaderboardEntryDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let now = Utc::now();
    let users = UserService::new(&state.db).get_leaderboard(now).await?;

    let entries: Vec<LeaderboardEntryDto> = users
        .into_iter()
        .map(|user| user.into_leaderboard_dto(now))
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}
