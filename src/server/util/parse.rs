use chrono::{Datelike, NaiveDate};

use crate::server::error::AppError;

const MIN_YEAR: i32 = 1970;
const MAX_YEAR: i32 = 9999;

/// Parses a `YYYY-MM-DD` query value into a local calendar date.
///
/// # Arguments
/// - `value` - Raw query string value
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(AppError::BadRequest)` - Value is not a valid calendar date in years 1970-9999
pub fn parse_local_date(value: &str) -> Result<NaiveDate, AppError> {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) => Ok(date),
        _ => Err(AppError::BadRequest(format!(
            "Invalid date '{}', expected YYYY-MM-DD",
            value
        ))),
    }
}

/// Parses a month number from a query value, accepting 1 through 12.
pub fn parse_month(value: &str) -> Result<u32, AppError> {
    match value.trim().parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(month),
        _ => Err(AppError::BadRequest(format!(
            "Invalid month '{}', expected 1-12",
            value
        ))),
    }
}

/// Parses a year from a query value, accepting 1970 through 9999.
pub fn parse_year(value: &str) -> Result<i32, AppError> {
    match value.trim().parse::<i32>() {
        Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Ok(year),
        _ => Err(AppError::BadRequest(format!(
            "Invalid year '{}', expected 1970-9999",
            value
        ))),
    }
}

/// Parses a positive record ID from a path segment.
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("Invalid id '{}'", value))),
    }
}
