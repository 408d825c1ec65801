//! Generate operation - one table in, one DAO file out.

use std::{collections::BTreeMap, path::PathBuf};

use daogen_catalog::{CatalogSource, ConnectionConfig, MySqlCatalog, StaticCatalog};
use daogen_codegen::{Generator, Template, TypeScriptTypeMapper};
use daogen_core::{GenerationRequest, Result};
use daogen_manifest::UnmappedTypePolicy;
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Where column metadata is read from.
#[derive(Debug, Clone)]
pub enum ColumnSource {
    /// `INFORMATION_SCHEMA.COLUMNS` on a live server
    MySql(ConnectionConfig),
    /// A JSON array of columns
    File(PathBuf),
}

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub request: GenerationRequest,
    pub source: ColumnSource,
    pub output_dir: PathBuf,
    /// Template file; the built-in template when `None`
    pub template: Option<PathBuf>,
    pub policy: UnmappedTypePolicy,
    /// Extra type mappings from daogen.toml
    pub types: BTreeMap<String, String>,
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Nothing is written unless every stage before the write succeeded.
pub fn generate(config: &GenerateConfig) -> Result<GenerateReport> {
    let table = &config.request.table_name;

    let catalog: Box<dyn CatalogSource> = match &config.source {
        ColumnSource::MySql(conn) => Box::new(MySqlCatalog::new(conn.clone())),
        ColumnSource::File(path) => Box::new(StaticCatalog::from_json_file(path, table)?),
    };
    let database = match &config.source {
        ColumnSource::MySql(conn) => conn.database.as_str(),
        ColumnSource::File(_) => "",
    };

    info!(
        "Generating DAO for {} ({}) from {}",
        table,
        config.request.author_label,
        catalog.describe()
    );
    let columns = catalog.table_columns(database, table)?;
    info!("Found {} columns", columns.len());

    let template = match &config.template {
        Some(path) => Template::from_file(path)?,
        None => Template::builtin()?,
    };
    info!("Using template {}", template.name());

    let generator = Generator::new(config.request.clone(), template)
        .with_mapper(TypeScriptTypeMapper::new().with_overrides(config.types.clone()))
        .with_policy(config.policy);

    let (unmapped, result) = if config.dry_run {
        let preview = generator.preview(&columns)?;
        (
            preview.unmapped,
            GenerationResult::Preview(PreviewResult {
                path: config.output_dir.join(&preview.path),
                content: preview.content,
            }),
        )
    } else {
        let written = generator.generate(&columns, &config.output_dir)?;
        info!("Wrote {}", written.path.display());
        (
            written.unmapped,
            GenerationResult::Written(WrittenResult {
                path: written.path,
                write: written.write,
            }),
        )
    };

    Ok(GenerateReport {
        table: table.clone(),
        author: config.request.author_label.clone(),
        source: catalog.describe(),
        columns: columns.len(),
        unmapped,
        result,
    })
}
