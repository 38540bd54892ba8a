//! Aggregated intake reports.
//!
//! Each report is built from the logs already selected for its window. Building is pure:
//! it only buckets logs by local date, sums amounts in 64-bit integers and computes the
//! percentage of the window's goal.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::{
    model::report::{DailyReportDto, MonthlyReportDto, WeeklyReportDto},
    server::{
        model::water_log::WaterLog,
        util::time::{local_date, week_of_month, DAYS_PER_WEEK},
    },
};

/// Percentage of `goal` reached by `total`, rounded to the nearest integer.
///
/// Not capped at 100. Returns 0 when `goal` is not positive.
pub fn percentage_of_goal(total: i64, goal: i64) -> i64 {
    if goal <= 0 {
        return 0;
    }
    ((total as f64 / goal as f64) * 100.0).round() as i64
}

fn sum_amounts(logs: &[WaterLog]) -> i64 {
    logs.iter().map(|log| log.amount as i64).sum()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Intake for one local calendar day.
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total_amount: i64,
    pub goal: i64,
    pub logs: Vec<WaterLog>,
}

impl DailyReport {
    /// Builds the report for `date` from the logs of that day.
    ///
    /// # Arguments
    /// - `date` - Local calendar date of the report
    /// - `daily_goal` - User's daily goal in ml
    /// - `logs` - Logs inside the day's window, ordered by creation time
    pub fn build(date: NaiveDate, daily_goal: i32, logs: Vec<WaterLog>) -> Self {
        Self {
            date,
            total_amount: sum_amounts(&logs),
            goal: daily_goal as i64,
            logs,
        }
    }

    pub fn percentage(&self) -> i64 {
        percentage_of_goal(self.total_amount, self.goal)
    }

    pub fn into_dto(self) -> DailyReportDto {
        DailyReportDto {
            date: format_date(self.date),
            total_amount: self.total_amount,
            goal: self.goal,
            percentage: self.percentage(),
            logs: self.logs.into_iter().map(WaterLog::into_dto).collect(),
        }
    }
}

/// Intake for a Sunday-start week, bucketed per day.
#[derive(Debug, Clone)]
pub struct WeeklyReport {
    pub start_date: NaiveDate,
    /// Inclusive last day of the week (the Saturday).
    pub end_date: NaiveDate,
    pub total_amount: i64,
    pub goal: i64,
    /// Total per local date, always holding all seven days.
    pub daily_data: BTreeMap<NaiveDate, i64>,
    pub logs: Vec<WaterLog>,
}

impl WeeklyReport {
    /// Builds the report for the week starting on `start_date`.
    ///
    /// Every day of the week is present in `daily_data`, days without logs at 0. Logs
    /// outside the week are ignored for bucketing but still counted in the total, so
    /// callers must pass only logs from the week's window.
    ///
    /// # Arguments
    /// - `start_date` - Sunday the week starts on
    /// - `daily_goal` - User's daily goal in ml, multiplied by 7 for the week
    /// - `logs` - Logs inside the week's window
    pub fn build(start_date: NaiveDate, daily_goal: i32, logs: Vec<WaterLog>) -> Self {
        let mut daily_data: BTreeMap<NaiveDate, i64> = (0..DAYS_PER_WEEK)
            .map(|offset| (start_date + Duration::days(offset), 0))
            .collect();

        for log in &logs {
            if let Some(bucket) = daily_data.get_mut(&local_date(log.created_at)) {
                *bucket += log.amount as i64;
            }
        }

        Self {
            start_date,
            end_date: start_date + Duration::days(DAYS_PER_WEEK - 1),
            total_amount: sum_amounts(&logs),
            goal: daily_goal as i64 * DAYS_PER_WEEK,
            daily_data,
            logs,
        }
    }

    pub fn percentage(&self) -> i64 {
        percentage_of_goal(self.total_amount, self.goal)
    }

    pub fn into_dto(self) -> WeeklyReportDto {
        let percentage = self.percentage();

        WeeklyReportDto {
            start_date: format_date(self.start_date),
            end_date: format_date(self.end_date),
            total_amount: self.total_amount,
            goal: self.goal,
            percentage,
            daily_data: self
                .daily_data
                .into_iter()
                .map(|(date, amount)| (format_date(date), amount))
                .collect(),
            logs: self.logs.into_iter().map(WaterLog::into_dto).collect(),
        }
    }
}

/// Intake for a calendar month, bucketed by week of month.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub total_amount: i64,
    pub goal: i64,
    /// Total per 1-based week of month, holding every week the month touches.
    pub weekly_data: BTreeMap<u32, i64>,
    pub logs: Vec<WaterLog>,
}

impl MonthlyReport {
    /// Builds the report for `month` of `year`.
    ///
    /// # Arguments
    /// - `year`, `month` - Calendar month of the report
    /// - `days_in_month` - Number of days in that month
    /// - `daily_goal` - User's daily goal in ml, multiplied by `days_in_month`
    /// - `logs` - Logs inside the month's window
    pub fn build(
        year: i32,
        month: u32,
        days_in_month: u32,
        daily_goal: i32,
        logs: Vec<WaterLog>,
    ) -> Self {
        let mut weekly_data: BTreeMap<u32, i64> = (1..=week_of_month(days_in_month))
            .map(|week| (week, 0))
            .collect();

        for log in &logs {
            let day = local_date(log.created_at).day();
            if let Some(bucket) = weekly_data.get_mut(&week_of_month(day)) {
                *bucket += log.amount as i64;
            }
        }

        Self {
            month,
            year,
            total_amount: sum_amounts(&logs),
            goal: daily_goal as i64 * days_in_month as i64,
            weekly_data,
            logs,
        }
    }

    pub fn percentage(&self) -> i64 {
        percentage_of_goal(self.total_amount, self.goal)
    }

    pub fn into_dto(self) -> MonthlyReportDto {
        let percentage = self.percentage();

        MonthlyReportDto {
            month: self.month,
            year: self.year,
            total_amount: self.total_amount,
            goal: self.goal,
            percentage,
            weekly_data: self
                .weekly_data
                .into_iter()
                .map(|(week, amount)| (format!("Week {}", week), amount))
                .collect(),
            logs: self.logs.into_iter().map(WaterLog::into_dto).collect(),
        }
    }
}
