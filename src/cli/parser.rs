use crate::errors::AppError;
use crate::models::column::Column;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// `--start` / `--end` value parser.
pub fn date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()).to_string())
}

/// `--width` value parser: a positive integer.
pub fn width_arg(s: &str) -> Result<usize, String> {
    let n: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not an integer", s))?;
    if n <= 0 {
        return Err(AppError::InvalidWidth(n).to_string());
    }
    Ok(n as usize)
}

/// Command-line interface definition for clocklog
#[derive(Parser)]
#[command(
    name = "clocklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time tracker: clock in, clock out, and report time per day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start clock (closes any running entry first)
    In {
        #[arg(long, short, default_value = "", help = "Description for an entry")]
        description: String,

        #[arg(long, help = "Wait for Ctrl-C, then stop the clock")]
        wait: bool,
    },

    /// End clock
    Out,

    /// Print log
    Log {
        #[arg(long, help = "Show entries whose description matches this regex")]
        regex: Option<String>,

        #[arg(long = "column", value_enum, help = "Columns to print (repeatable)")]
        columns: Vec<Column>,

        #[arg(
            long,
            value_name = "DATE",
            value_parser = date_arg,
            help = "Starting date (YYYY-MM-DD or YYYY.MM.DD)"
        )]
        start: Option<NaiveDate>,

        #[arg(
            long,
            value_name = "DATE",
            value_parser = date_arg,
            help = "Ending date, exclusive (YYYY-MM-DD or YYYY.MM.DD)"
        )]
        end: Option<NaiveDate>,
    },

    /// Show current clock
    Status {
        #[arg(long = "column", value_enum, help = "Columns to print (repeatable)")]
        columns: Vec<Column>,
    },

    /// Show daily stats
    Stats {
        #[arg(long, help = "Print a bar chart instead of a table")]
        plot: bool,

        #[arg(
            long,
            allow_negative_numbers = true,
            value_parser = width_arg,
            help = "Plot width in ticks (positive, default from config)"
        )]
        width: Option<usize>,

        #[arg(
            long,
            value_name = "DATE",
            value_parser = date_arg,
            help = "Starting date (YYYY-MM-DD or YYYY.MM.DD)"
        )]
        start: Option<NaiveDate>,

        #[arg(
            long,
            value_name = "DATE",
            value_parser = date_arg,
            help = "Ending date, exclusive (YYYY-MM-DD or YYYY.MM.DD)"
        )]
        end: Option<NaiveDate>,
    },

    /// Print the internal operation log
    History,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },
}
