use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        water::{AddWaterDto, AddWaterResponseDto, DeleteWaterResponseDto, WaterLogDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidatedJson},
        model::water_log::{CreateWaterLogParam, WaterLog},
        service::intake::IntakeService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping intake endpoints in OpenAPI documentation
pub static WATER_TAG: &str = "water";

/// Log water intake for the authenticated user.
///
/// # Returns
/// - `201 Created` - Log stored, new running total returned
/// - `400 Bad Request` - Amount outside 1-10000 ml or note too long
/// - `401 Unauthorized` / `403 Forbidden` - Token missing or invalid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/water",
    tag = WATER_TAG,
    security(("bearer_auth" = [])),
    request_body = AddWaterDto,
    responses(
        (status = 201, description = "Water intake logged", body = AddWaterResponseDto),
        (status = 400, description = "Invalid amount or note", body = ValidationErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_water(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<AddWaterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let param = CreateWaterLogParam::from_dto(user.id, payload, Utc::now());
    let change = IntakeService::new(&state.db).add_water(user, param).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddWaterResponseDto {
            message: "Water intake logged".to_string(),
            water_log: change.log.into_dto(),
            new_total: change.new_total,
        }),
    ))
}

/// Delete one of the authenticated user's logs.
///
/// # Returns
/// - `200 OK` - Log deleted, new running total returned
/// - `400 Bad Request` - ID is not a positive integer
/// - `401 Unauthorized` - Token missing
/// - `403 Forbidden` - Invalid token, or the log belongs to another user
/// - `404 Not Found` - No log with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/water/{id}",
    tag = WATER_TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Water log ID")
    ),
    responses(
        (status = 200, description = "Water log deleted", body = DeleteWaterResponseDto),
        (status = 400, description = "Invalid water log ID", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid token or log owned by another user", body = ErrorDto),
        (status = 404, description = "Water log not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_water(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let id = parse_id(&id)?;

    let change = IntakeService::new(&state.db)
        .delete_water(user, id, Utc::now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(DeleteWaterResponseDto {
            message: "Water log deleted".to_string(),
            new_total: change.new_total,
        }),
    ))
}

/// List today's logs for the authenticated user, newest first.
#[utoipa::path(
    get,
    path = "/api/water/history",
    tag = WATER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Today's water logs", body = Vec<WaterLogDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let logs = IntakeService::new(&state.db)
        .history(&user, Utc::now())
        .await?;

    let logs: Vec<WaterLogDto> = logs.into_iter().map(WaterLog::into_dto).collect();

    Ok((StatusCode::OK, Json(logs)))
}
