//! Shift duration arithmetic.
//!
//! All computations happen on whole minutes within a single calendar day;
//! the overnight policy decides what a clock-out before clock-in means.

use crate::errors::{AppError, AppResult};
use crate::models::duration::WorkDuration;
use crate::models::overnight::OvernightPolicy;
use crate::models::shift::ShiftRecord;
use crate::utils::time::{format_time, minutes_between, parse_time};
use chrono::NaiveTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Duration between two `HH:MM` strings.
pub fn compute_duration(start: &str, end: &str, policy: OvernightPolicy) -> AppResult<WorkDuration> {
    let s = parse_time(start)?;
    let e = parse_time(end)?;
    duration_between(s, e, policy)
}

pub fn duration_between(
    start: NaiveTime,
    end: NaiveTime,
    policy: OvernightPolicy,
) -> AppResult<WorkDuration> {
    let mut diff = minutes_between(start, end);

    if diff < 0 {
        match policy {
            OvernightPolicy::Wrap => diff = diff.rem_euclid(MINUTES_PER_DAY),
            OvernightPolicy::Reject => {
                return Err(AppError::OvernightShift {
                    start: format_time(start),
                    end: format_time(end),
                });
            }
        }
    }

    // 0 <= diff < MINUTES_PER_DAY here
    Ok(WorkDuration::from_minutes(diff as u32))
}

/// Sum a column of `"<H>h <M>m"` strings. Blank entries are skipped; any
/// other unparsable entry, or one that overflows the total, fails the sum.
pub fn aggregate_total<I, S>(entries: I) -> AppResult<WorkDuration>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = WorkDuration::ZERO;

    for entry in entries {
        let v = entry.as_ref().trim();
        if v.is_empty() {
            continue;
        }
        total = total
            .checked_add(v.parse::<WorkDuration>()?)
            .ok_or_else(|| AppError::InvalidDuration(v.to_string()))?;
    }

    Ok(total)
}

/// Sum the stored durations of `records`; rows without one count as zero.
/// Fails with `InvalidDuration` naming the first duration that overflows.
pub fn total_of(records: &[ShiftRecord]) -> AppResult<WorkDuration> {
    records
        .iter()
        .filter_map(|r| r.hours)
        .try_fold(WorkDuration::ZERO, |acc, h| {
            acc.checked_add(h)
                .ok_or_else(|| AppError::InvalidDuration(h.to_string()))
        })
}
