use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Elapsed work time kept as a normalized `(hours, minutes)` pair.
///
/// The textual form `"<H>h <M>m"` only exists at the boundaries
/// (work log file and terminal output).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WorkDuration {
    hours: u32,
    minutes: u32, // always 0..=59
}

impl WorkDuration {
    pub const ZERO: WorkDuration = WorkDuration {
        hours: 0,
        minutes: 0,
    };

    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    /// Build from separate parts; minutes above 59 are carried into hours.
    /// `None` when the carried hours do not fit.
    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        Some(Self {
            hours: hours.checked_add(minutes / 60)?,
            minutes: minutes % 60,
        })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }

    /// Sum of two durations, `None` on hour overflow.
    pub fn checked_add(self, rhs: WorkDuration) -> Option<WorkDuration> {
        let minutes = self.minutes + rhs.minutes; // at most 118
        let hours = self
            .hours
            .checked_add(rhs.hours)?
            .checked_add(minutes / 60)?;

        Some(Self {
            hours,
            minutes: minutes % 60,
        })
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

impl FromStr for WorkDuration {
    type Err = AppError;

    /// Parse `"<H>h <M>m"`, splitting on the `h` and `m` markers.
    fn from_str(s: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidDuration(s.to_string());

        let (h, rest) = s.trim().split_once('h').ok_or_else(invalid)?;
        let m = rest.trim().strip_suffix('m').ok_or_else(invalid)?;

        let hours: u32 = h.trim().parse().map_err(|_| invalid())?;
        let minutes: u32 = m.trim().parse().map_err(|_| invalid())?;

        if minutes > 59 {
            return Err(invalid());
        }

        Ok(Self { hours, minutes })
    }
}
