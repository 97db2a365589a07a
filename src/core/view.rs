use crate::core::calculator::duration::total_of;
use crate::db::repository::ShiftRepository;
use crate::errors::AppResult;
use crate::models::duration::WorkDuration;
use crate::models::shift::ShiftRecord;

/// Everything the `list` command renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkLog {
    pub records: Vec<ShiftRecord>,
    pub total: WorkDuration,
}

pub struct ViewLogic;

impl ViewLogic {
    /// Load all records with their total, or `None` when there are none.
    pub fn load<R: ShiftRepository + ?Sized>(repo: &mut R) -> AppResult<Option<WorkLog>> {
        let records = repo.list()?;
        if records.is_empty() {
            return Ok(None);
        }

        let total = total_of(&records)?;
        Ok(Some(WorkLog { records, total }))
    }
}
