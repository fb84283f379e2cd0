use crate::cli::{Commands, RangeActions};
use crate::clock::current_time_system;
use crate::config::Config;
use crate::convert::{
    convert_12_to_24, convert_24_to_12, format_time_input, is_valid_12_hour, is_valid_24_hour,
    TimeFormat,
};
use crate::range::{
    convert_time_range_12_to_24, convert_time_range_24_to_12, format_time_range_input,
    is_valid_time_range_12, is_valid_time_range_24, is_valid_time_range_order,
};
use crate::state::{ConvertEvent, ConvertForm, FieldIssue, RangeEvent, RangeForm};
use anyhow::{bail, Result};
use rustyline::DefaultEditor;

pub struct Application {
    config: Config,
    convert_form: ConvertForm,
    range_form: RangeForm,
}

impl Application {
    pub fn new(config: Config) -> Self {
        Self { config, convert_form: ConvertForm::default(), range_form: RangeForm::default() }
    }

    pub fn run(&mut self) -> Result<()> {
        log::info!("Starting TimeFlip Terminal");
        log::debug!("Default input format: {}", self.config.display.default_format);

        let mut rl = DefaultEditor::new()?;

        println!(
            "Welcome to TimeFlip {}! Type 'help' for commands.",
            crate::version::get_display_version()
        );
        if self.config.display.show_examples {
            print_examples();
        }

        let prompt = "🕐 ";

        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    if let Err(err) = self.process_input(&line) {
                        log::error!("Failed to process input: {:?}", err);
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn process_input(&mut self, line: &str) -> Result<()> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            "help" => print_help(),
            "examples" => print_examples(),
            "exit" | "quit" => {
                println!("Goodbye!");
                std::process::exit(0);
            }
            "12" => self.edit_time(TimeFormat::Hour12, rest),
            "24" => self.edit_time(TimeFormat::Hour24, rest),
            "range12" => self.edit_range(TimeFormat::Hour12, rest),
            "range24" => self.edit_range(TimeFormat::Hour24, rest),
            "now" => {
                let current = current_time_system();
                log::debug!("Clock snapshot: {:?}", current);
                self.convert_form = self.convert_form.apply(ConvertEvent::SetCurrent(current));
                self.print_convert_form();
            }
            "clear" => {
                self.convert_form = self.convert_form.apply(ConvertEvent::Clear);
                self.range_form = self.range_form.apply(RangeEvent::Clear);
                println!("Cleared.");
            }
            "show" => {
                self.print_convert_form();
                self.print_range_form();
            }
            // Anything else is treated as time input for the configured
            // default field.
            _ => self.edit_time(self.config.display.default_format, trimmed),
        }

        Ok(())
    }

    fn edit_time(&mut self, format: TimeFormat, value: &str) {
        self.convert_form = self.convert_form.apply(ConvertEvent::Edit(format, value.to_string()));
        self.print_convert_form();
    }

    fn edit_range(&mut self, format: TimeFormat, value: &str) {
        self.range_form = self.range_form.apply(RangeEvent::Edit(format, value.to_string()));
        self.print_range_form();
    }

    fn print_convert_form(&self) {
        print_field(
            "12-hour",
            &self.convert_form.time12,
            self.convert_form.is_12_valid(),
            self.convert_form.error12.as_ref(),
        );
        print_field(
            "24-hour",
            &self.convert_form.time24,
            self.convert_form.is_24_valid(),
            self.convert_form.error24.as_ref(),
        );
    }

    fn print_range_form(&self) {
        print_field(
            "12-hour range",
            &self.range_form.range12,
            self.range_form.is_12_valid(),
            self.range_form.error12.as_ref(),
        );
        print_field(
            "24-hour range",
            &self.range_form.range24,
            self.range_form.is_24_valid(),
            self.range_form.error24.as_ref(),
        );
    }
}

/// Executes a single non-interactive command and prints its result to stdout.
pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::To24 { time } => {
            let formatted = format_time_input(&time, TimeFormat::Hour12);
            match convert_12_to_24(&formatted) {
                Some(converted) => println!("{}", converted),
                None => bail!("{}", FieldIssue::Format12),
            }
        }
        Commands::To12 { time } => match convert_24_to_12(time.trim()) {
            Some(converted) => println!("{}", converted),
            None => bail!("{}", FieldIssue::Format24),
        },
        Commands::Now => {
            let current = current_time_system();
            println!("12-hour: {}", current.time12);
            println!("24-hour: {}", current.time24);
        }
        Commands::Fmt { format, input } => {
            println!("{}", format_time_input(&input, TimeFormat::from(format)));
        }
        Commands::Check { format, time } => {
            let valid = match TimeFormat::from(format) {
                TimeFormat::Hour12 => is_valid_12_hour(&time),
                TimeFormat::Hour24 => is_valid_24_hour(&time),
            };
            println!("{}", if valid { "valid" } else { "invalid" });
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Range { action } => run_range_command(action)?,
    }

    Ok(())
}

fn run_range_command(action: RangeActions) -> Result<()> {
    match action {
        RangeActions::To24 { range } => {
            let formatted = format_time_range_input(&range, TimeFormat::Hour12);
            match convert_time_range_12_to_24(&formatted) {
                Some(converted) => {
                    println!("{}", converted);
                    if !is_valid_time_range_order(&formatted) {
                        log::warn!("{}", FieldIssue::OutOfOrder);
                    }
                }
                None => bail!("{}", FieldIssue::RangeFormat12),
            }
        }
        RangeActions::To12 { range } => {
            let formatted = format_time_range_input(&range, TimeFormat::Hour24);
            match convert_time_range_24_to_12(&formatted) {
                Some(converted) => {
                    println!("{}", converted);
                    if !is_valid_time_range_order(&formatted) {
                        log::warn!("{}", FieldIssue::OutOfOrder);
                    }
                }
                None => bail!("{}", FieldIssue::RangeFormat24),
            }
        }
        RangeActions::Check { range } => match detect_range_format(&range) {
            Some((format, normalized)) => {
                println!("format: {}-hour", format);
                // Bare ranges like "12:30 to 1:30" read as 12-hour via the
                // appended AM designator; echo that reading so the verdict
                // names the range it applies to.
                println!("normalized: {}", normalized);
                if is_valid_time_range_order(&normalized) {
                    println!("order: ok");
                } else {
                    println!("order: {}", FieldIssue::OutOfOrder);
                    std::process::exit(1);
                }
            }
            None => {
                println!("format: invalid");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Detects which format a raw range reads as, returning it together with
/// the normalized range that reading produced.
///
/// The 12-hour reading wins when the input fits both, matching the
/// precedence of [`is_valid_time_range_order`].
fn detect_range_format(range: &str) -> Option<(TimeFormat, String)> {
    let as12 = format_time_range_input(range, TimeFormat::Hour12);
    if is_valid_time_range_12(&as12) {
        return Some((TimeFormat::Hour12, as12));
    }

    let as24 = format_time_range_input(range, TimeFormat::Hour24);
    if is_valid_time_range_24(&as24) {
        return Some((TimeFormat::Hour24, as24));
    }

    None
}

fn print_field(label: &str, value: &str, valid: bool, error: Option<&FieldIssue>) {
    let marker = if value.is_empty() {
        ' '
    } else if valid {
        '✓'
    } else {
        '✗'
    };
    println!("  {} {:<15} {}", marker, format!("{}:", label), value);
    if let Some(issue) = error {
        println!("      {}", issue);
    }
}

fn print_help() {
    println!("TimeFlip - Convert between 12-hour and 24-hour time formats");
    println!();
    println!("COMMANDS:");
    println!("  12 <time>        Edit the 12-hour field (e.g., 12 2:30 PM)");
    println!("  24 <time>        Edit the 24-hour field (e.g., 24 14:30)");
    println!("  range12 <range>  Edit the 12-hour range field (e.g., range12 9:00 AM to 5:00 PM)");
    println!("  range24 <range>  Edit the 24-hour range field (e.g., range24 09:00 to 17:00)");
    println!("  now              Fill both time fields with the current time");
    println!("  show             Print both forms");
    println!("  clear            Reset both forms");
    println!("  examples         Show format examples");
    println!("  help             Show this help");
    println!("  exit             Exit the application");
    println!();
    println!("Anything else is treated as time input for the default field.");
}

fn print_examples() {
    println!("12-Hour Format Examples:     24-Hour Format Examples:");
    println!("  12:00 AM (midnight)          00:00 (midnight)");
    println!("  6:30 AM                      06:30");
    println!("  12:00 PM (noon)              12:00");
    println!("  11:45 PM                     23:45");
}
