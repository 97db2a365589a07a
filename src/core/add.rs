use crate::core::calculator::duration::duration_between;
use crate::db::repository::ShiftRepository;
use crate::errors::AppResult;
use crate::models::overnight::OvernightPolicy;
use crate::models::shift::ShiftRecord;
use crate::utils::time::parse_time;
use chrono::NaiveDate;

pub struct AddLogic;

impl AddLogic {
    /// Validate the clock times, compute the duration and append the shift.
    ///
    /// Nothing is written when either time is malformed or the overnight
    /// policy refuses the pair.
    pub fn apply<R: ShiftRepository + ?Sized>(
        repo: &mut R,
        date: NaiveDate,
        start: &str,
        end: &str,
        policy: OvernightPolicy,
    ) -> AppResult<ShiftRecord> {
        let start_t = parse_time(start)?;
        let end_t = parse_time(end)?;
        let hours = duration_between(start_t, end_t, policy)?;

        repo.append(ShiftRecord::new(date, start_t, end_t, hours))
    }
}
