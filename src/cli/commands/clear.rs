use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{ClearOutcome, CsvStore, ShiftRepository};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let path = cfg.worklog_path();

        if !*yes && !ask_confirmation("Delete ALL work records? This action is irreversible.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = CsvStore::new(&path);

        match store.clear()? {
            ClearOutcome::NothingToClear => warning("No record found."),
            ClearOutcome::Cleared { removed } => {
                success("All records cleared!");
                audit(
                    cfg,
                    "clear",
                    &path.display().to_string(),
                    &format!("{} record(s) removed", removed),
                );
            }
        }
    }

    Ok(())
}
