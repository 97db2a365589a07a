use crate::errors::AppResult;
use crate::models::shift::COLUMNS;
use csv::Writer;
use std::fs;
use std::path::Path;

/// Create the work log with its header if it does not exist yet.
///
/// Safe to call before every operation: an existing file is never touched.
/// Returns true when the file was created.
pub fn ensure_storage(path: &Path) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(COLUMNS)?;
    wtr.flush()?;

    Ok(true)
}
