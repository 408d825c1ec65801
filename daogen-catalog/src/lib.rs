//! Column metadata sources for daogen.
//!
//! [`CatalogSource`] is the seam between the generator and the database:
//! [`MySqlCatalog`] reads `INFORMATION_SCHEMA.COLUMNS` over a single
//! connection, [`StaticCatalog`] serves columns from memory or a JSON file.

mod config;
mod mysql;
mod static_catalog;

pub use config::{ConnectionConfig, Endpoint};
use daogen_core::{Error, RawColumn, Result};
pub use mysql::{COLUMNS_QUERY, MySqlCatalog};
pub use static_catalog::StaticCatalog;

/// A source of column metadata.
pub trait CatalogSource {
    /// Human-readable description of where columns come from
    fn describe(&self) -> String;

    /// Fetch the columns of `table` in `database`, in catalog order.
    ///
    /// An unknown table yields an empty list.
    fn fetch_columns(&self, database: &str, table: &str) -> Result<Vec<RawColumn>>;

    /// Fetch the columns of `table`, failing when the table has none.
    fn table_columns(&self, database: &str, table: &str) -> Result<Vec<RawColumn>> {
        let columns = self.fetch_columns(database, table)?;
        if columns.is_empty() {
            return Err(Box::new(Error::TableNotFound {
                database: database.to_string(),
                table: table.to_string(),
            }));
        }
        Ok(columns)
    }
}
