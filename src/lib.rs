pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod convert;
pub mod range;
pub mod state;
pub mod version;

use anyhow::Result;
use log::info;

/// Loads the configuration and runs the interactive terminal.
pub fn run() -> Result<()> {
    let config = Config::load()?;
    info!("Initializing TimeFlip application");
    let mut app = app::Application::new(config);
    app.run()
}

// Re-export commonly used types
pub use clock::{current_time, current_time_system, Clock, CurrentTime, SystemClock};
pub use config::Config;
pub use convert::{
    convert_12_to_24, convert_24_to_12, format_time_input, is_valid_12_hour, is_valid_24_hour,
    TimeFormat,
};
pub use range::{
    convert_time_range_12_to_24, convert_time_range_24_to_12, format_time_range_input,
    is_valid_time_range_12, is_valid_time_range_24, is_valid_time_range_order, parse_time_range,
    TimeRange,
};
pub use state::{ConvertEvent, ConvertForm, FieldIssue, RangeEvent, RangeForm};
