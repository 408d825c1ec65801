mod commands;
mod logging;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

/// Settings file read from the working directory before arguments are parsed.
const DOTENV_FILE: &str = ".env";

fn main() -> Result<()> {
    color_eyre::install()?;
    load_dotenv()?;

    Cli::parse().run()
}

/// Export `.env` entries that are not already set in the environment.
fn load_dotenv() -> Result<()> {
    match dotenvy::from_path(DOTENV_FILE) {
        Ok(()) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(eyre::Report::new(err).wrap_err(format!("failed to load {DOTENV_FILE}"))),
    }
}
