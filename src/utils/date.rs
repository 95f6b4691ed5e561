//! Date utilities: month arithmetic and VTracklery timestamp parsing.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// Advance `d` by `m` calendar months, preserving day-of-month and
/// time-of-day.
///
/// The month index wraps with year carry; `(month + m) % 12 == 0` maps to
/// December of the previous carried year. A day-of-month that does not
/// exist in the target month (e.g. Jan 31 + 1 month) is rejected as
/// `InvalidDate`.
pub fn delta_month(d: NaiveDateTime, m: u32) -> AppResult<NaiveDateTime> {
    let total = d.month() + m;
    let mut carry = (total / 12) as i32;
    let mut month = total % 12;
    if month == 0 {
        month = 12;
        carry -= 1;
    }

    NaiveDate::from_ymd_opt(d.year() + carry, month, d.day())
        .map(|date| date.and_time(d.time()))
        .ok_or_else(|| {
            AppError::InvalidDate(format!(
                "{:04}-{:02}-{:02} does not exist",
                d.year() + carry,
                month,
                d.day()
            ))
        })
}

/// Parse a VTracklery timestamp.
///
/// The first two whitespace-separated tokens must be `YYYY-MM-DD` and
/// `HH:MM:SS`; any trailing tokens are ignored.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let mut tokens = s.split_whitespace();
    let (date, time) = match (tokens.next(), tokens.next()) {
        (Some(d), Some(t)) => (d, t),
        _ => return Err(AppError::InvalidTimestamp(s.to_string())),
    };

    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S")
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Whole days between two timestamps (truncated, like a timedelta `.days`).
pub fn days_between(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    (later - earlier).num_days()
}

/// Half-open week window `[start + wk weeks, start + wk+1 weeks)`.
pub fn week_window(start: NaiveDateTime, wk: u64) -> (NaiveDateTime, NaiveDateTime) {
    let wk_start = start + Days::new(wk * 7);
    let wk_end = start + Days::new((wk + 1) * 7);
    (wk_start, wk_end)
}
