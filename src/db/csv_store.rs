use super::initialize::ensure_storage;
use super::queries::{hours_column, line_of_hours, map_row, read_rows, write_rows};
use super::repository::{ClearOutcome, ShiftRepository};
use crate::core::calculator::duration::aggregate_total;
use crate::errors::{AppError, AppResult};
use crate::models::duration::WorkDuration;
use crate::models::shift::ShiftRecord;
use csv::StringRecord;
use std::path::{Path, PathBuf};

/// Work log kept in a comma-separated file (`date,start,end,hours`).
///
/// Every call re-reads the file; nothing is cached between operations.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShiftRepository for CsvStore {
    fn ensure(&mut self) -> AppResult<bool> {
        ensure_storage(&self.path)
    }

    fn append(&mut self, record: ShiftRecord) -> AppResult<ShiftRecord> {
        self.ensure()?;

        // Existing rows are carried over verbatim, even unparsable ones.
        let mut rows: Vec<StringRecord> = read_rows(&self.path)?
            .into_iter()
            .map(|r| r.fields)
            .collect();
        rows.push(StringRecord::from(record.to_row().to_vec()));

        write_rows(&self.path, &rows)?;
        Ok(record)
    }

    fn list(&mut self) -> AppResult<Vec<ShiftRecord>> {
        self.ensure()?;
        read_rows(&self.path)?.iter().map(map_row).collect()
    }

    fn clear(&mut self) -> AppResult<ClearOutcome> {
        if !self.path.exists() {
            return Ok(ClearOutcome::NothingToClear);
        }

        // A table with a broken header or bad content is still cleared;
        // a file that cannot be read at all is not.
        let removed = match read_rows(&self.path) {
            Ok(rows) => rows.len(),
            Err(AppError::InvalidHeader { .. }) => 0,
            Err(AppError::Csv(e)) if !e.is_io_error() => 0,
            Err(e) => return Err(e),
        };
        write_rows(&self.path, &[])?;

        Ok(ClearOutcome::Cleared { removed })
    }

    /// Sums the `hours` column only, without parsing the other cells.
    fn total(&mut self) -> AppResult<WorkDuration> {
        self.ensure()?;
        let rows = read_rows(&self.path)?;

        aggregate_total(hours_column(&rows)).map_err(|e| match e {
            AppError::InvalidDuration(value) => AppError::CorruptedRecord {
                line: line_of_hours(&rows, &value).unwrap_or(0),
                reason: AppError::InvalidDuration(value).to_string(),
            },
            other => other,
        })
    }
}
