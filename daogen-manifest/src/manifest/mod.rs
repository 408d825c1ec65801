//! Manifest types and parsing for daogen.toml files.

mod file;
mod parse;
mod policy;
mod validate;

use std::{collections::BTreeMap, path::PathBuf};

pub use file::DaogenToml;
pub use policy::UnmappedTypePolicy;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for daogen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output and template settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Extra MySQL base type to TypeScript type mappings
    #[serde(default)]
    pub types: BTreeMap<String, String>,
}

/// `[generator]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the DAO file is written to (default: `output`)
    pub output_dir: Option<PathBuf>,

    /// Template file replacing the built-in DAO template
    pub template: Option<PathBuf>,

    /// What to do with column types the mapper does not know
    pub unmapped_types: Option<UnmappedTypePolicy>,
}
