pub mod add;
pub mod clear;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod total;

use crate::config::Config;
use crate::db::log::ttlog;
use crate::ui::messages::warning;

/// Write to the operation log; a failure here never fails the command.
pub(crate) fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&cfg.log_path(), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
