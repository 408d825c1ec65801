use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, load_manifest};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to daogen.toml (defaults to ./daogen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template file to check instead of the configured one
    #[arg(long)]
    pub template: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let daogen_toml = load_manifest(self.config.as_deref()).unwrap_or_exit();

        let report = ops::check(daogen_toml.as_ref(), self.template.as_deref()).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
