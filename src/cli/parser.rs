use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for pointage
/// CLI application to track daily clock punches with SQLite
#[derive(Parser)]
#[command(
    name = "pointage",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch-clock CLI: record start/pause/end times and balance them against a fixed daily quota",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record or update the punches of a day
    Set {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        /// Work start time (HH:MM, partial digit input accepted)
        #[arg(long = "start", help = "Work start time (HH:MM)")]
        start: Option<String>,

        /// Pause start time
        #[arg(long = "pause-start", help = "Pause start time (HH:MM)")]
        pause_start: Option<String>,

        /// Pause end time
        #[arg(long = "pause-end", help = "Pause end time (HH:MM)")]
        pause_end: Option<String>,

        /// Work end time
        #[arg(long = "end", help = "Work end time (HH:MM)")]
        end: Option<String>,
    },

    /// Show the breakdown of one day
    Show {
        /// Date to show (YYYY-MM-DD, default: today)
        date: Option<String>,
    },

    /// Show all days of a month and the monthly balance
    Month {
        /// Month to show (YYYY-MM, default: current month)
        month: Option<String>,
    },

    /// Show month subtotals and the yearly balance
    Year {
        /// Year to show (YYYY, default: current year)
        year: Option<i32>,
    },

    /// Delete the record of a day
    Del {
        date: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Delete ALL records
    Reset {
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Export records together with their computed breakdowns
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "PERIOD",
            help = "Filter export by month (YYYY-MM) or year (YYYY)"
        )]
        period: Option<String>,
    },
}
