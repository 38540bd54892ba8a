use crate::server::{
    data::water_log::WaterLogRepository,
    model::water_log::CreateWaterLogParam,
    util::time::day_window,
};
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::{DbErr, Order};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_id;
