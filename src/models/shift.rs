use super::duration::WorkDuration;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Column order of the work log, header included.
pub const COLUMNS: [&str; 4] = ["date", "start", "end", "hours"];

/// One logged work period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftRecord {
    pub date: NaiveDate,   // ⇔ "date"  (YYYY-MM-DD)
    pub start: NaiveTime,  // ⇔ "start" (HH:MM)
    pub end: NaiveTime,    // ⇔ "end"   (HH:MM)
    /// Computed when the shift is added. `None` only for rows whose
    /// `hours` cell was left empty in the file.
    pub hours: Option<WorkDuration>,
}

impl ShiftRecord {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime, hours: WorkDuration) -> Self {
        Self {
            date,
            start,
            end,
            hours: Some(hours),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }

    pub fn hours_str(&self) -> String {
        self.hours.map(|h| h.to_string()).unwrap_or_default()
    }

    /// Row as written to the work log, in `COLUMNS` order.
    pub fn to_row(&self) -> [String; 4] {
        [
            self.date_str(),
            self.start_str(),
            self.end_str(),
            self.hours_str(),
        ]
    }
}
