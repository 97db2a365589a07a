use clap::{Parser, Subcommand};

/// Command-line interface definition for Clocky
/// CLI application to log work shifts into a CSV file
#[derive(Parser)]
#[command(
    name = "clocky",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clocky - Your Work Hours Tracker: log clock-in/clock-out shifts and sum worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override the work log path (useful for tests or a custom file)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the work log
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },

    /// Add a work shift
    Add {
        /// Date of the shift (YYYY-MM-DD, default: today)
        date: Option<String>,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM, default from config: 09:00)")]
        start: Option<String>,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM, default from config: 17:00)")]
        end: Option<String>,
    },

    /// List all work records and the total worked hours
    List {
        #[arg(long = "plain", help = "Print rows without table formatting or colours")]
        plain: bool,
    },

    /// Print only the total worked hours
    Total,

    /// Delete all work records
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
