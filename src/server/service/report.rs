//! Report service: windowed aggregation of a user's intake logs.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, Order};

use crate::server::{
    data::water_log::WaterLogRepository,
    error::AppError,
    model::{
        report::{DailyReport, MonthlyReport, WeeklyReport},
        user::User,
    },
    util::time::{day_window, days_in_month, local_date, month_window, week_window},
};

fn out_of_range(date: NaiveDate) -> AppError {
    AppError::BadRequest(format!("Date {} is out of range", date))
}

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the report for one local day.
    ///
    /// # Arguments
    /// - `user` - Authenticated user, whose goal is the report's goal
    /// - `date` - Local date, `None` for today
    /// - `now` - Current instant
    ///
    /// # Returns
    /// - `Ok(DailyReport)` - Report for the day
    /// - `Err(AppError::BadRequest)` - Date at the edge of the calendar
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn daily(
        &self,
        user: &User,
        date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<DailyReport, AppError> {
        let date = date.unwrap_or_else(|| local_date(now));
        let window = day_window(date).ok_or_else(|| out_of_range(date))?;

        let logs = WaterLogRepository::new(self.db)
            .get_by_user_in_window(user.id, window, Order::Asc)
            .await?;

        Ok(DailyReport::build(date, user.daily_water_goal, logs))
    }

    /// Builds the report for the Sunday-start week containing `anchor`.
    ///
    /// # Arguments
    /// - `user` - Authenticated user
    /// - `anchor` - Any local date inside the week, `None` for today
    /// - `now` - Current instant
    pub async fn weekly(
        &self,
        user: &User,
        anchor: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<WeeklyReport, AppError> {
        let anchor = anchor.unwrap_or_else(|| local_date(now));
        let (start_date, window) =
            week_window(anchor).ok_or_else(|| out_of_range(anchor))?;

        let logs = WaterLogRepository::new(self.db)
            .get_by_user_in_window(user.id, window, Order::Asc)
            .await?;

        Ok(WeeklyReport::build(start_date, user.daily_water_goal, logs))
    }

    /// Builds the report for a calendar month.
    ///
    /// # Arguments
    /// - `user` - Authenticated user
    /// - `month` - Month 1-12, `None` for the current local month
    /// - `year` - Year, `None` for the current local year
    /// - `now` - Current instant
    ///
    /// # Returns
    /// - `Ok(MonthlyReport)` - Report with one bucket per week of the month
    /// - `Err(AppError::BadRequest)` - Month outside 1-12 or unrepresentable year
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn monthly(
        &self,
        user: &User,
        month: Option<u32>,
        year: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<MonthlyReport, AppError> {
        let today = local_date(now);
        let month = month.unwrap_or_else(|| today.month());
        let year = year.unwrap_or_else(|| today.year());

        let invalid = || AppError::BadRequest(format!("Invalid month {}-{}", year, month));
        let window = month_window(year, month).ok_or_else(invalid)?;
        let days = days_in_month(year, month).ok_or_else(invalid)?;

        let logs = WaterLogRepository::new(self.db)
            .get_by_user_in_window(user.id, window, Order::Asc)
            .await?;

        Ok(MonthlyReport::build(
            year,
            month,
            days,
            user.daily_water_goal,
            logs,
        ))
    }
}
