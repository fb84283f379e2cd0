use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use timeflip::cli::Cli;

fn main() -> Result<()> {
    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            log::debug!("Running one-shot command: {:?}", command);
            timeflip::app::run_command(command)
        }
        None => timeflip::run(),
    }
}
