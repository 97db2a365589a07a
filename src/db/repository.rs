use crate::core::calculator::duration::total_of;
use crate::errors::AppResult;
use crate::models::duration::WorkDuration;
use crate::models::shift::ShiftRecord;

/// Result of a bulk clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The table existed and now holds zero rows.
    Cleared { removed: usize },
    /// There was no table to clear; nothing was created.
    NothingToClear,
}

/// Append-only store of shift records.
///
/// Records are never updated one by one: the only way to remove data is
/// `clear`, which drops every row at once.
pub trait ShiftRepository {
    /// Make sure the backing table exists (header only when new).
    /// Returns true when it had to be created.
    fn ensure(&mut self) -> AppResult<bool>;

    /// Store `record` after every existing row and return it.
    fn append(&mut self, record: ShiftRecord) -> AppResult<ShiftRecord>;

    /// All records in insertion order. Empty when nothing was logged yet.
    fn list(&mut self) -> AppResult<Vec<ShiftRecord>>;

    fn clear(&mut self) -> AppResult<ClearOutcome>;

    /// Sum of every stored duration.
    fn total(&mut self) -> AppResult<WorkDuration> {
        total_of(&self.list()?)
    }
}
