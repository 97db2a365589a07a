//! Low-level reads and writes of the work log CSV.

use crate::errors::{AppError, AppResult};
use crate::models::duration::WorkDuration;
use crate::models::shift::{COLUMNS, ShiftRecord};
use crate::utils::date::parse_date;
use crate::utils::path::temp_sibling;
use crate::utils::time::parse_time;
use csv::{ReaderBuilder, StringRecord, Writer};
use std::fs;
use std::path::Path;

/// A raw data row plus the file line it came from (1-based, header = line 1).
#[derive(Debug, Clone)]
pub struct RawRow {
    pub line: u64,
    pub fields: StringRecord,
}

/// Read every data row as-is, after checking the header.
pub fn read_rows(path: &Path) -> AppResult<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = rdr.headers()?.clone();
    if headers.iter().map(str::trim).ne(COLUMNS.iter().copied()) {
        return Err(AppError::InvalidHeader {
            expected: COLUMNS.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let fields = rec?;
        let line = fields.position().map(|p| p.line()).unwrap_or(0);
        out.push(RawRow { line, fields });
    }
    Ok(out)
}

/// Rewrite the whole file: header, then `rows` in order.
///
/// Data goes to a temporary sibling first and is renamed over `path`, so a
/// failed write leaves the previous content in place. The permissions of an
/// existing `path` carry over to the new file.
pub fn write_rows(path: &Path, rows: &[StringRecord]) -> AppResult<()> {
    let tmp = temp_sibling(path);

    let result = (|| -> AppResult<()> {
        let mut wtr = Writer::from_path(&tmp)?;
        wtr.write_record(COLUMNS)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        drop(wtr);

        if let Ok(meta) = fs::metadata(path) {
            fs::set_permissions(&tmp, meta.permissions())?;
        }

        fs::rename(&tmp, path)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Convert a raw row into a `ShiftRecord`; any unparsable cell marks the
/// row as corrupted.
pub fn map_row(row: &RawRow) -> AppResult<ShiftRecord> {
    let corrupted = |reason: String| AppError::CorruptedRecord {
        line: row.line,
        reason,
    };

    if row.fields.len() != COLUMNS.len() {
        return Err(corrupted(format!(
            "expected {} fields, found {}",
            COLUMNS.len(),
            row.fields.len()
        )));
    }

    let cell = |i: usize| row.fields.get(i).unwrap_or("").trim();

    let date = parse_date(cell(0)).map_err(|e| corrupted(e.to_string()))?;
    let start = parse_time(cell(1)).map_err(|e| corrupted(e.to_string()))?;
    let end = parse_time(cell(2)).map_err(|e| corrupted(e.to_string()))?;

    let hours = match cell(3) {
        "" => None,
        s => Some(
            s.parse::<WorkDuration>()
                .map_err(|e| corrupted(e.to_string()))?,
        ),
    };

    Ok(ShiftRecord {
        date,
        start,
        end,
        hours,
    })
}

/// The `hours` cell of every row, in file order.
pub fn hours_column(rows: &[RawRow]) -> Vec<String> {
    rows.iter().map(|r| hours_cell(r).to_string()).collect()
}

/// File line of the first row whose `hours` cell is `value`.
pub fn line_of_hours(rows: &[RawRow], value: &str) -> Option<u64> {
    rows.iter()
        .find(|r| hours_cell(r).trim() == value.trim())
        .map(|r| r.line)
}

fn hours_cell(row: &RawRow) -> &str {
    row.fields.get(3).unwrap_or("")
}
