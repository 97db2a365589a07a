use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::CsvStore;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};
use crate::utils::date;

/// Add a work shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, start, end } = cmd {
        let start = start.as_deref().unwrap_or(cfg.default_start.as_str());
        let end = end.as_deref().unwrap_or(cfg.default_end.as_str());

        let result = date::parse_date_or_today(date.as_deref()).and_then(|d| {
            let mut store = CsvStore::new(cfg.worklog_path());
            AddLogic::apply(&mut store, d, start, end, cfg.overnight)
        });

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                if e.is_input_error() {
                    error("Shift rejected, nothing was written.");
                }
                return Err(e);
            }
        };

        success(format!(
            "Shift added. [{}] {} - {} ({})",
            record.date_str(),
            record.start_str(),
            record.end_str(),
            record.hours_str()
        ));

        audit(
            cfg,
            "add",
            &record.date_str(),
            &format!(
                "{} - {} ({})",
                record.start_str(),
                record.end_str(),
                record.hours_str()
            ),
        );
    }

    Ok(())
}
