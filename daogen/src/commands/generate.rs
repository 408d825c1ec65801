use std::path::PathBuf;

use clap::Args;
use daogen_catalog::{ConnectionConfig, Endpoint};
use daogen_core::{Error, GenerationRequest, Result};
use daogen_manifest::{DaogenToml, UnmappedTypePolicy};
use eyre::Result as EyreResult;

use super::{UnwrapOrExit, load_manifest};
use crate::{
    ops::{self, ColumnSource, GenerateConfig},
    reports::{Report, TerminalOutput},
};

/// Output directory used when neither the flag nor daogen.toml sets one.
const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Args, Debug, Default)]
pub struct GenerateCommand {
    /// Table to generate the DAO for
    #[arg(short, long, env = "DAO_TABLE_NAME")]
    pub table: Option<String>,

    /// Author name stamped into the generated doc comments
    #[arg(short, long, env = "AUTHOR")]
    pub author: Option<String>,

    /// MySQL user
    #[arg(short, long, env = "MYSQL_USERNAME")]
    pub username: Option<String>,

    /// MySQL password
    #[arg(short, long, env = "MYSQL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Unix socket of the MySQL server
    #[arg(short, long, env = "MYSQL_SOCKETPATH")]
    pub socket: Option<PathBuf>,

    /// MySQL host, used when no socket is given
    #[arg(long, env = "MYSQL_HOST")]
    pub host: Option<String>,

    /// MySQL port
    #[arg(short = 'P', long, env = "MYSQL_PORT", default_value_t = 3306)]
    pub port: u16,

    /// Schema the table lives in
    #[arg(short, long, env = "MYSQL_DATABASE_NAME")]
    pub database: Option<String>,

    /// Path to daogen.toml (defaults to ./daogen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template file replacing the built-in DAO template
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Directory the DAO is written to [default: output]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// What to do with column types that have no TypeScript mapping [default: error]
    #[arg(long, value_name = "POLICY")]
    pub unmapped_types: Option<UnmappedTypePolicy>,

    /// Read columns from a JSON file instead of MySQL
    #[arg(long, value_name = "FILE")]
    pub columns_from: Option<PathBuf>,

    /// Print the generated file without writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> EyreResult<()> {
        let daogen_toml = load_manifest(self.config.as_deref()).unwrap_or_exit();
        let config = self.resolve(daogen_toml.as_ref()).unwrap_or_exit();

        let report = ops::generate(&config).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Merge flags, environment and daogen.toml into one run configuration.
    ///
    /// Flags and environment win over the file, the file wins over defaults.
    pub fn resolve(&self, daogen_toml: Option<&DaogenToml>) -> Result<GenerateConfig> {
        let table = required(&self.table, "table", "DAO_TABLE_NAME", "table")?;
        if table.contains(['/', '\\']) {
            return Err(Error::config_invalid(
                "table",
                table,
                "must not contain a path separator",
            ));
        }
        let author = required(&self.author, "author", "AUTHOR", "author")?;

        let source = match &self.columns_from {
            Some(path) => ColumnSource::File(path.clone()),
            None => ColumnSource::MySql(self.connection()?),
        };

        let generator = daogen_toml.map(|t| &t.manifest().generator);
        let from_file = |path: Option<&PathBuf>| {
            path.zip(daogen_toml)
                .map(|(path, daogen_toml)| daogen_toml.resolve(path))
        };

        let output_dir = self
            .output_dir
            .clone()
            .or_else(|| from_file(generator.and_then(|g| g.output_dir.as_ref())))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let template = self
            .template
            .clone()
            .or_else(|| from_file(generator.and_then(|g| g.template.as_ref())));

        let policy = self
            .unmapped_types
            .or_else(|| generator.and_then(|g| g.unmapped_types))
            .unwrap_or_default();

        let types = daogen_toml
            .map(|t| t.manifest().types.clone())
            .unwrap_or_default();

        Ok(GenerateConfig {
            request: GenerationRequest::new(table, author),
            source,
            output_dir,
            template,
            policy,
            types,
            dry_run: self.dry_run,
        })
    }

    fn connection(&self) -> Result<ConnectionConfig> {
        let username = required(&self.username, "MySQL user", "MYSQL_USERNAME", "username")?;
        let database = required(
            &self.database,
            "MySQL database",
            "MYSQL_DATABASE_NAME",
            "database",
        )?;

        let endpoint = match (&self.socket, &self.host) {
            (Some(socket), _) => Endpoint::Socket(socket.clone()),
            (None, Some(host)) => Endpoint::Tcp {
                host: host.clone(),
                port: self.port,
            },
            (None, None) => {
                return Err(Error::config_missing(
                    "MySQL socket path",
                    "MYSQL_SOCKETPATH",
                    "socket",
                ));
            }
        };

        Ok(ConnectionConfig {
            username,
            password: self.password.clone(),
            endpoint,
            database,
        })
    }
}

fn required(value: &Option<String>, name: &str, env: &str, flag: &str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(Error::config_missing(name, env, flag)),
    }
}
