use clap::{Parser, Subcommand, ValueEnum};

use crate::convert::TimeFormat;
use crate::version::VERSION;

/// TimeFlip - terminal converter between 12-hour and 24-hour time formats
#[derive(Debug, Parser)]
#[command(name = "timeflip")]
#[command(about = "Convert times between 12-hour and 24-hour formats", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Command to execute (if not specified, enters interactive terminal mode)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a 12-hour time (e.g., "2:30 PM") to 24-hour format
    #[command(alias = "t24")]
    To24 {
        /// Time in 12-hour format; a missing AM/PM defaults to AM
        #[arg(required = true)]
        time: String,
    },

    /// Convert a 24-hour time (e.g., "14:30") to 12-hour format
    #[command(alias = "t12")]
    To12 {
        /// Time in 24-hour format
        #[arg(required = true)]
        time: String,
    },

    /// Show the current time in both formats
    Now,

    /// Normalize raw time input without converting it
    Fmt {
        /// Format the input is meant for
        #[arg(long, value_enum, default_value = "12")]
        format: FormatArg,

        /// Raw input as typed
        #[arg(required = true)]
        input: String,
    },

    /// Check whether a time matches a format
    Check {
        /// Format to check against
        #[arg(long, value_enum, default_value = "12")]
        format: FormatArg,

        /// Time string to check
        #[arg(required = true)]
        time: String,
    },

    /// Convert and inspect time ranges ("9:00 AM to 5:00 PM")
    Range {
        #[command(subcommand)]
        action: RangeActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum RangeActions {
    /// Convert a 12-hour range to 24-hour format
    #[command(alias = "t24")]
    To24 {
        /// Range in 12-hour format, e.g. "9:00 AM to 5:00 PM"
        #[arg(required = true)]
        range: String,
    },

    /// Convert a 24-hour range to 12-hour format
    #[command(alias = "t12")]
    To12 {
        /// Range in 24-hour format, e.g. "09:00 to 17:00"
        #[arg(required = true)]
        range: String,
    },

    /// Report a range's detected format and chronological order
    Check {
        /// Range in either format
        #[arg(required = true)]
        range: String,
    },
}

/// Command-line spelling of the two time formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// 12-hour clock with AM/PM
    #[value(name = "12")]
    H12,
    /// 24-hour clock
    #[value(name = "24")]
    H24,
}

impl From<FormatArg> for TimeFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::H12 => TimeFormat::Hour12,
            FormatArg::H24 => TimeFormat::Hour24,
        }
    }
}
