use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        report::{
            DailyReportDto, DailyReportQuery, MonthlyReportDto, MonthlyReportQuery,
            WeeklyReportDto, WeeklyReportQuery,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::report::ReportService,
        state::AppState,
        util::parse::{parse_local_date, parse_month, parse_year},
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Intake report for one local day.
///
/// # Returns
/// - `200 OK` - Total, goal, percentage and the day's logs in ascending order
/// - `400 Bad Request` - `date` is not `YYYY-MM-DD`
/// - `401 Unauthorized` / `403 Forbidden` - Token missing or invalid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reports/daily",
    tag = REPORT_TAG,
    security(("bearer_auth" = [])),
    params(DailyReportQuery),
    responses(
        (status = 200, description = "Daily report", body = DailyReportDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_daily_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DailyReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let date = query.date.as_deref().map(parse_local_date).transpose()?;

    let report = ReportService::new(&state.db)
        .daily(&user, date, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Intake report for the Sunday-start week containing `week`.
///
/// # Returns
/// - `200 OK` - Totals with one bucket per day of the week
/// - `400 Bad Request` - `week` is not `YYYY-MM-DD`
/// - `401 Unauthorized` / `403 Forbidden` - Token missing or invalid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reports/weekly",
    tag = REPORT_TAG,
    security(("bearer_auth" = [])),
    params(WeeklyReportQuery),
    responses(
        (status = 200, description = "Weekly report", body = WeeklyReportDto),
        (status = 400, description = "Invalid week anchor date", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_weekly_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<WeeklyReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let anchor = query.week.as_deref().map(parse_local_date).transpose()?;

    let report = ReportService::new(&state.db)
        .weekly(&user, anchor, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Intake report for a calendar month.
///
/// # Returns
/// - `200 OK` - Totals with one bucket per week of the month
/// - `400 Bad Request` - `month` outside 1-12 or `year` outside 1970-9999
/// - `401 Unauthorized` / `403 Forbidden` - Token missing or invalid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reports/monthly",
    tag = REPORT_TAG,
    security(("bearer_auth" = [])),
    params(MonthlyReportQuery),
    responses(
        (status = 200, description = "Monthly report", body = MonthlyReportDto),
        (status = 400, description = "Invalid month or year", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monthly_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MonthlyReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let month = query.month.as_deref().map(parse_month).transpose()?;
    let year = query.year.as_deref().map(parse_year).transpose()?;

    let report = ReportService::new(&state.db)
        .monthly(&user, month, year, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
