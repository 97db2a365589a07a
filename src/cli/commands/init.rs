use crate::cli::commands::audit;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::ensure_storage;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the work log with its header row
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    header("Clocky - Your Work Hours Tracker");

    if !cli.test {
        let path = cfg.save()?;
        info(format!("Config file : {}", path.display()));
    }

    let worklog = cfg.worklog_path();
    let created = ensure_storage(&worklog)?;

    if created {
        success(format!("Work log created at {}", worklog.display()));
        audit(
            cfg,
            "init",
            &worklog.display().to_string(),
            "Work log initialized",
        );
    } else {
        info(format!("Work log already present at {}", worklog.display()));
    }

    Ok(())
}
