use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::{ViewLogic, WorkLog};
use crate::db::CsvStore;
use crate::errors::AppResult;
use crate::models::shift::COLUMNS;
use crate::ui::messages::info;
use crate::utils::colors::{colorize_duration, colorize_in_out};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { plain } = cmd {
        let mut store = CsvStore::new(cfg.worklog_path());

        match ViewLogic::load(&mut store)? {
            None => info("No work records yet."),
            Some(log) if *plain => print_plain(&log),
            Some(log) => print_table(&log),
        }
    }
    Ok(())
}

fn print_plain(log: &WorkLog) {
    println!("{}", COLUMNS.join(","));
    for r in &log.records {
        println!("{}", r.to_row().join(","));
    }
    println!("Total Work Hours: {}", log.total);
}

fn print_table(log: &WorkLog) {
    let mut table = Table::new(COLUMNS.iter().map(|h| Column::new(h)).collect());

    for r in &log.records {
        table.add_row(vec![
            r.date_str(),
            colorize_in_out(&r.start_str(), true),
            colorize_in_out(&r.end_str(), false),
            colorize_duration(&r.hours_str()),
        ]);
    }

    print!("{}", table.render());
    println!();
    println!("\x1b[1mTotal Work Hours\x1b[0m: {}", log.total);
}
