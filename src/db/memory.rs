use super::repository::{ClearOutcome, ShiftRepository};
use crate::errors::AppResult;
use crate::models::shift::ShiftRecord;

/// In-process work log. Nothing survives the value being dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Option<Vec<ShiftRecord>>, // None until the table "exists"
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ShiftRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }
}

impl ShiftRepository for MemoryStore {
    fn ensure(&mut self) -> AppResult<bool> {
        if self.records.is_some() {
            return Ok(false);
        }
        self.records = Some(Vec::new());
        Ok(true)
    }

    fn append(&mut self, record: ShiftRecord) -> AppResult<ShiftRecord> {
        self.records
            .get_or_insert_with(Vec::new)
            .push(record.clone());
        Ok(record)
    }

    fn list(&mut self) -> AppResult<Vec<ShiftRecord>> {
        self.ensure()?;
        Ok(self.records.clone().unwrap_or_default())
    }

    fn clear(&mut self) -> AppResult<ClearOutcome> {
        match self.records.as_mut() {
            None => Ok(ClearOutcome::NothingToClear),
            Some(rows) => {
                let removed = rows.len();
                rows.clear();
                Ok(ClearOutcome::Cleared { removed })
            }
        }
    }
}
