use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

use crate::model::water::WaterLogDto;

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct DailyReportQuery {
    /// Local calendar date `YYYY-MM-DD`, defaults to today
    pub date: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct WeeklyReportQuery {
    /// Any local date `YYYY-MM-DD` inside the wanted week, defaults to today
    pub week: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct MonthlyReportQuery {
    /// Month number 1-12, defaults to the current month
    pub month: Option<String>,
    /// Four digit year, defaults to the current year
    pub year: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DailyReportDto {
    pub date: String,
    pub total_amount: i64,
    pub goal: i64,
    pub percentage: i64,
    pub logs: Vec<WaterLogDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReportDto {
    pub start_date: String,
    pub end_date: String,
    pub total_amount: i64,
    pub goal: i64,
    pub percentage: i64,
    /// ISO date -> total ml for each of the seven days
    pub daily_data: BTreeMap<String, i64>,
    pub logs: Vec<WaterLogDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportDto {
    pub month: u32,
    pub year: i32,
    pub total_amount: i64,
    pub goal: i64,
    pub percentage: i64,
    /// `"Week N"` -> total ml for each week of the month
    pub weekly_data: BTreeMap<String, i64>,
    pub logs: Vec<WaterLogDto>,
}
