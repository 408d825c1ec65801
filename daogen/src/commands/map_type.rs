use std::path::PathBuf;

use clap::Args;
use daogen_codegen::{TypeMapper, TypeScriptTypeMapper, parse_column_type};
use eyre::Result;

use super::{UnwrapOrExit, load_manifest};

#[derive(Args)]
pub struct MapTypeCommand {
    /// MySQL column type, e.g. "varchar(255)" or "enum('a','b')"
    pub raw_type: String,

    /// Path to daogen.toml (defaults to ./daogen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl MapTypeCommand {
    /// Run the map-type command
    pub fn run(&self) -> Result<()> {
        let mapper = match load_manifest(self.config.as_deref()).unwrap_or_exit() {
            Some(daogen_toml) => TypeScriptTypeMapper::from_manifest(daogen_toml.manifest()),
            None => TypeScriptTypeMapper::new(),
        };

        let mapped = mapper.map_type(&self.raw_type);
        if mapped.is_empty() {
            eprintln!(
                "error: no TypeScript mapping for '{}' (base type '{}')",
                self.raw_type,
                parse_column_type(&self.raw_type).base
            );
            std::process::exit(1);
        }

        println!("{}", mapped);
        Ok(())
    }
}
