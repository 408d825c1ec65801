use std::{fmt, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for generation runs (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The stage of a generation run an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Connect,
    Query,
    TypeMapping,
    Template,
    Write,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Config => "configuration",
            Stage::Connect => "connection",
            Stage::Query => "catalog query",
            Stage::TypeMapping => "type mapping",
            Stage::Template => "template rendering",
            Stage::Write => "output write",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("missing required configuration '{name}'")]
    #[diagnostic(
        code(daogen::config_missing),
        help("set the {env} environment variable or pass --{flag}")
    )]
    ConfigMissing {
        name: String,
        env: String,
        flag: String,
    },

    #[error("invalid {name} '{value}': {reason}")]
    #[diagnostic(code(daogen::config_invalid))]
    ConfigInvalid {
        name: String,
        value: String,
        reason: String,
    },

    #[error("failed to connect to MySQL at {target}")]
    #[diagnostic(
        code(daogen::connection),
        help("check MYSQL_SOCKETPATH or MYSQL_HOST/MYSQL_PORT and the credentials")
    )]
    Connection {
        target: String,
        #[source]
        source: BoxError,
    },

    #[error("catalog query failed while {context}")]
    #[diagnostic(code(daogen::query))]
    Query {
        context: String,
        #[source]
        source: BoxError,
    },

    #[error("table '{table}' has no columns in schema '{database}'")]
    #[diagnostic(
        code(daogen::table_not_found),
        help("check DAO_TABLE_NAME and MYSQL_DATABASE_NAME; table names are case-sensitive on most servers")
    )]
    TableNotFound { database: String, table: String },

    #[error("column '{column}' has unmapped type '{raw_type}'")]
    #[diagnostic(
        code(daogen::unmapped_type),
        help(
            "add a mapping under [types] in daogen.toml, e.g. {base} = \"string\", or set generator.unmapped_types"
        )
    )]
    UnmappedType {
        column: String,
        raw_type: String,
        base: String,
    },

    #[error("failed to read template '{path}'")]
    #[diagnostic(code(daogen::template_missing))]
    TemplateMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(daogen::template))]
    Template {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(daogen::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a missing configuration error
    pub fn config_missing(
        name: impl Into<String>,
        env: impl Into<String>,
        flag: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::ConfigMissing {
            name: name.into(),
            env: env.into(),
            flag: flag.into(),
        })
    }

    /// Create an invalid configuration error
    pub fn config_invalid(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::ConfigInvalid {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    /// Create a connection error
    pub fn connection(target: impl Into<String>, source: impl Into<BoxError>) -> Box<Self> {
        Box::new(Error::Connection {
            target: target.into(),
            source: source.into(),
        })
    }

    /// Create a query error with context about where it occurred
    pub fn query(context: impl Into<String>, source: impl Into<BoxError>) -> Box<Self> {
        Box::new(Error::Query {
            context: context.into(),
            source: source.into(),
        })
    }

    /// Create a template error pointing into the template source
    pub fn template(
        message: impl Into<String>,
        src: &str,
        name: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Template {
            src: NamedSource::new(name, src.to_string()),
            span,
            message: message.into(),
        })
    }

    /// The run stage this error belongs to
    pub fn stage(&self) -> Stage {
        match self {
            Error::ConfigMissing { .. } | Error::ConfigInvalid { .. } => Stage::Config,
            Error::Connection { .. } => Stage::Connect,
            Error::Query { .. } | Error::TableNotFound { .. } => Stage::Query,
            Error::UnmappedType { .. } => Stage::TypeMapping,
            Error::TemplateMissing { .. } | Error::Template { .. } => Stage::Template,
            Error::Write { .. } => Stage::Write,
        }
    }
}
