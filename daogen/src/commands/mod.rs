mod check;
mod completions;
mod generate;
mod map_type;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use daogen_manifest::DaogenToml;
use eyre::Result;
use generate::GenerateCommand;
use map_type::MapTypeCommand;

use crate::logging;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for daogen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for daogen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{} failed", e.stage());
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Open `--config` when given, otherwise look for daogen.toml in the working directory.
pub(crate) fn load_manifest(config: Option<&Path>) -> daogen_manifest::Result<Option<DaogenToml>> {
    match config {
        Some(path) => DaogenToml::open(path).map(Some),
        None => DaogenToml::discover("."),
    }
}

#[derive(Parser)]
#[command(name = "daogen")]
#[command(version)]
#[command(about = "Generate TypeScript DAOs from MySQL table metadata")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    /// Log filter (error, warn, info, debug, trace or an EnvFilter directive)
    #[arg(long, global = true, env = "DAOGEN_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(&self.log_level)?;

        match &self.command {
            None => self.generate.run(),
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::MapType(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the DAO file for a table (the default)
    Generate(GenerateCommand),

    /// Validate daogen.toml and the template without touching the database
    Check(CheckCommand),

    /// Print the TypeScript type for a MySQL column type
    MapType(MapTypeCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
