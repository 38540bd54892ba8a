//! Fixed-offset local time frame.
//!
//! Every stored instant is UTC. Calendar questions ("which day is this log on", "is the
//! running total from today") are answered in one fixed zone, UTC+03:00, through the
//! functions below and nowhere else.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

/// Hours the local zone is ahead of UTC.
pub const LOCAL_UTC_OFFSET_HOURS: i64 = 3;

/// Number of days covered by a weekly report.
pub const DAYS_PER_WEEK: i64 = 7;

/// Half-open UTC interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

fn local_offset() -> Duration {
    Duration::hours(LOCAL_UTC_OFFSET_HOURS)
}

/// Calendar date of `instant` in the local zone.
pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    (instant + local_offset()).date_naive()
}

/// UTC instant of local midnight at the start of `date`.
///
/// `None` only at the edge of chrono's representable range.
pub fn local_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .checked_sub_signed(local_offset())
}

/// Window covering the whole local day `date`.
pub fn day_window(date: NaiveDate) -> Option<TimeWindow> {
    let start = local_midnight(date)?;
    Some(TimeWindow {
        start,
        end: start.checked_add_signed(Duration::days(1))?,
    })
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_signed(Duration::days(
        date.weekday().num_days_from_sunday() as i64,
    ))
}

/// First day and window of the Sunday-start week containing `anchor`.
pub fn week_window(anchor: NaiveDate) -> Option<(NaiveDate, TimeWindow)> {
    let first_day = week_start(anchor)?;
    let start = local_midnight(first_day)?;
    Some((
        first_day,
        TimeWindow {
            start,
            end: start.checked_add_signed(Duration::days(DAYS_PER_WEEK))?,
        },
    ))
}

fn first_of_next_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
}

/// Window from local midnight on the 1st of the month to the 1st of the next month.
///
/// Returns `None` when `month` is not 1-12 or the year is outside chrono's range.
pub fn month_window(year: i32, month: u32) -> Option<TimeWindow> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first_of_next_month(year, month)?;
    Some(TimeWindow {
        start: local_midnight(first)?,
        end: local_midnight(next)?,
    })
}

/// Number of days in the given month, `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first_of_next_month(year, month)?;
    Some((next - first).num_days() as u32)
}

/// 1-based week-of-month bucket for a day of the month: `ceil(day / 7)`.
pub fn week_of_month(day: u32) -> u32 {
    day.div_ceil(7)
}

/// Whether a running total last reset at `last_reset` is stale at `now`.
///
/// True when the two instants fall on different local calendar days.
pub fn should_reset(last_reset: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    local_date(last_reset) != local_date(now)
}
