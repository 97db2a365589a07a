use crate::config::Config;
use crate::db::{CsvStore, ShiftRepository};
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = CsvStore::new(cfg.worklog_path());
    println!("{}", store.total()?);
    Ok(())
}
