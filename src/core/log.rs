use crate::db::log::{LogEntry, read_log};
use crate::errors::AppResult;
use crate::utils::table::visible_width;
use ansi_term::Colour;
use std::path::Path;

const MAX_OP_WIDTH: usize = 40;

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "clear" => Colour::Red,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_log(path)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        println!("📜 Internal log:\n");

        for (i, entry) in entries.iter().enumerate() {
            let op_target = render_op_target(entry);
            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(visible_width(&op_target)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                entry.date,
                op_target,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

/// `op (target)` with only the operation coloured, truncated to
/// `MAX_OP_WIDTH` visible characters.
fn render_op_target(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);

    let target = if entry.target.is_empty() {
        String::new()
    } else {
        format!(" ({})", entry.target)
    };

    let visible_len = entry.operation.chars().count() + target.chars().count();
    let target = if visible_len > MAX_OP_WIDTH {
        let keep = MAX_OP_WIDTH.saturating_sub(entry.operation.chars().count() + 3);
        let mut t: String = target.chars().take(keep).collect();
        t.push_str("...");
        t
    } else {
        target
    };

    format!("{}{}", color.paint(entry.operation.as_str()), target)
}
