use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::{AuthResponseDto, LoginDto, RegisterUserDto},
    },
    server::{
        error::AppError, middleware::validate::ValidatedJson, model::user::RegisterUserParam,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user with the default daily goal and returns a bearer token so the
/// client is logged in immediately.
///
/// # Returns
/// - `201 Created` - Account created, token and user summary returned
/// - `400 Bad Request` - Invalid name, email or password
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database, hashing or signing error
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ValidationErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let registered = AuthService::new(&state.db, &state.tokens)
        .register(RegisterUserParam::from_dto(payload), Utc::now())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            message: "User registered successfully".to_string(),
            token: registered.token,
            user: registered.user.into_summary_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// Applies the daily reset before returning the user summary.
///
/// # Returns
/// - `200 OK` - Credentials accepted, token and user summary returned
/// - `400 Bad Request` - Missing or malformed fields
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid login data", body = ValidationErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let logged_in = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password, Utc::now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            message: "Login successful".to_string(),
            token: logged_in.token,
            user: logged_in.user.into_summary_dto(),
        }),
    ))
}
