//! Time utilities: strict HH:MM parsing and minute arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// Two-digit hour 00-23, colon, two-digit minute 00-59.
static HH_MM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("valid HH:MM regex"));

pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    let invalid = || AppError::InvalidTime(t.to_string());

    let caps = HH_MM.captures(t.trim()).ok_or_else(invalid)?;
    let h: u32 = caps[1].parse().map_err(|_| invalid())?;
    let m: u32 = caps[2].parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(invalid)
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Minutes since midnight, seconds ignored.
pub fn minute_of_day(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    minute_of_day(end) - minute_of_day(start)
}
