use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitCode;
use todo::commands::dispatch;
use todo::libs::args::parse_args;
use todo::libs::config::Config;
use todo::libs::messages::macros::is_debug_mode;
use todo::libs::messages::Message;
use todo::msg_error;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    if !is_debug_mode() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todo=debug")))
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let config = Config::read().context("Failed to load configuration")?;
    let parsed = parse_args(std::env::args_os(), &config.date_format);

    let mut stdout = io::stdout().lock();
    dispatch(&parsed, &config, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(Message::FatalError(format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}
