use crate::errors::AppResult;
use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::OpenOptions;
use std::path::Path;

/// One line of the operation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an internal log line to the operation log at `path`.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Local time, RFC 3339
    let now = Local::now().to_rfc3339();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

/// Read the whole operation log. A missing file is an empty log.
pub fn read_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or("").to_string();
        out.push(LogEntry {
            date: field(0),
            operation: field(1),
            target: field(2),
            message: field(3),
        });
    }
    Ok(out)
}
