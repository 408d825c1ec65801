//! MySQL catalog reader.
//!
//! Opens one connection per fetch, runs the column query and closes the
//! connection again, whether or not the query succeeded.

use daogen_core::{Error, RawColumn, Result};
use sqlx::{
    Connection, Row,
    mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow},
};
use tracing::{debug, info, warn};

use crate::{
    CatalogSource,
    config::{ConnectionConfig, Endpoint},
};

/// Column metadata query.
///
/// Every text column is cast to CHAR: depending on the server version the
/// information schema reports them as binary strings, which do not decode
/// into `String`.
pub const COLUMNS_QUERY: &str = r#"
    SELECT
        CAST(COLUMN_NAME AS CHAR(255)) AS COLUMN_NAME,
        CAST(COLUMN_TYPE AS CHAR(4096)) AS COLUMN_TYPE,
        CAST(IS_NULLABLE AS CHAR(3)) AS IS_NULLABLE,
        CAST(COLUMN_DEFAULT AS CHAR(4096)) AS COLUMN_DEFAULT
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
    ORDER BY ORDINAL_POSITION
"#;

/// Reads column metadata from a MySQL server.
#[derive(Debug, Clone)]
pub struct MySqlCatalog {
    config: ConnectionConfig,
}

impl MySqlCatalog {
    pub fn new(config: ConnectionConfig) -> Self {
        Self { config }
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .username(&self.config.username)
            .database(&self.config.database)
            .charset("utf8mb4");

        let options = match &self.config.password {
            Some(password) => options.password(password),
            None => options,
        };

        match &self.config.endpoint {
            Endpoint::Socket(path) => options.socket(path),
            Endpoint::Tcp { host, port } => options.host(host).port(*port),
        }
    }

    async fn fetch(&self, database: &str, table: &str) -> Result<Vec<RawColumn>> {
        let target = self.config.target();
        let mut conn = MySqlConnection::connect_with(&self.connect_options())
            .await
            .map_err(|e| Error::connection(&target, e))?;
        info!("Connected to MySQL: {}", target);

        let result = query_columns(&mut conn, database, table).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close MySQL connection cleanly: {}", e);
        }

        result
    }
}

impl CatalogSource for MySqlCatalog {
    fn describe(&self) -> String {
        format!("mysql://{}", self.config.target())
    }

    fn fetch_columns(&self, database: &str, table: &str) -> Result<Vec<RawColumn>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::connection(self.config.target(), e))?;

        runtime.block_on(self.fetch(database, table))
    }
}

async fn query_columns(
    conn: &mut MySqlConnection,
    database: &str,
    table: &str,
) -> Result<Vec<RawColumn>> {
    debug!("Loading columns for {}.{}", database, table);

    let rows: Vec<MySqlRow> = sqlx::query(COLUMNS_QUERY)
        .bind(database)
        .bind(table)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| Error::query(format!("loading columns of {}.{}", database, table), e))?;

    let columns = rows
        .iter()
        .map(column_from_row)
        .collect::<Result<Vec<_>>>()?;

    debug!("Loaded {} columns for {}.{}", columns.len(), database, table);
    Ok(columns)
}

fn column_from_row(row: &MySqlRow) -> Result<RawColumn> {
    let decode = |e: sqlx::Error| Error::query("decoding a column row", e);

    Ok(column_from_parts(
        row.try_get("COLUMN_NAME").map_err(decode)?,
        row.try_get("COLUMN_TYPE").map_err(decode)?,
        &row.try_get::<String, _>("IS_NULLABLE").map_err(decode)?,
        row.try_get("COLUMN_DEFAULT").map_err(decode)?,
    ))
}

/// Build a column from the four catalog fields.
pub(crate) fn column_from_parts(
    name: String,
    column_type: String,
    is_nullable: &str,
    default: Option<String>,
) -> RawColumn {
    RawColumn {
        name,
        column_type,
        is_nullable: is_nullable.eq_ignore_ascii_case("YES"),
        default,
    }
}
