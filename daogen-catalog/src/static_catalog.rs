use std::{collections::HashMap, path::Path};

use daogen_core::{Error, RawColumn, Result};
use tracing::debug;

use crate::CatalogSource;

/// Columns held in memory, keyed by table name.
///
/// Tables are not scoped by database: every database sees the same tables.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    origin: String,
    tables: HashMap<String, Vec<RawColumn>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            origin: "memory".to_string(),
            tables: HashMap::new(),
        }
    }

    /// Add a table.
    pub fn table(mut self, name: impl Into<String>, columns: Vec<RawColumn>) -> Self {
        self.tables.insert(name.into(), columns);
        self
    }

    /// Load the columns of `table` from a JSON array of columns.
    pub fn from_json_file(path: impl AsRef<Path>, table: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::query(format!("reading {}", path.display()), e))?;
        let columns: Vec<RawColumn> = serde_json::from_str(&content)
            .map_err(|e| Error::query(format!("parsing {}", path.display()), e))?;

        debug!("Loaded {} columns from {}", columns.len(), path.display());

        Ok(Self {
            origin: path.display().to_string(),
            tables: HashMap::from([(table.into(), columns)]),
        })
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for StaticCatalog {
    fn describe(&self) -> String {
        self.origin.clone()
    }

    fn fetch_columns(&self, _database: &str, table: &str) -> Result<Vec<RawColumn>> {
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }
}
