//! MySQL to TypeScript type mapping.

use std::collections::BTreeMap;

use daogen_manifest::Manifest;

/// Fixed MySQL base type to TypeScript type table.
pub const MYSQL_TO_TS: &[(&str, &str)] = &[
    ("tinyint", "0 | 1"),
    ("int", "number"),
    ("bigint", "number"),
    ("float", "number"),
    ("varchar", "string"),
    ("char", "string"),
    ("date", "string"),
    ("text", "string"),
    ("json", "string"),
];

/// Trait for mapping raw column types to target language annotations.
pub trait TypeMapper {
    /// Map a raw column type, returning an empty string when it is unknown.
    fn map_type(&self, raw_type: &str) -> String;
}

/// A raw column type split into its base and parameter text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType<'a> {
    /// Lower-cased first word before the opening parenthesis
    pub base: String,
    /// Everything after the first `(`
    pub params: Option<&'a str>,
}

/// Split `varchar(255)`, `enum('a','b')` or `int unsigned` into base and params.
pub fn parse_column_type(raw_type: &str) -> ColumnType<'_> {
    let (head, params) = match raw_type.split_once('(') {
        Some((head, params)) => (head, Some(params)),
        None => (raw_type, None),
    };

    let base = head
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    ColumnType { base, params }
}

/// Map a raw type with the fixed table only.
pub fn map_type(raw_type: &str) -> String {
    TypeScriptTypeMapper::new().map_type(raw_type)
}

/// `enum('a','b')` becomes `'a' | 'b'`, quotes kept.
fn enum_union(params: &str) -> String {
    params
        .replace(')', "")
        .split(',')
        .collect::<Vec<_>>()
        .join(" | ")
}

/// TypeScript type mapper with optional extra mappings.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptTypeMapper {
    overrides: BTreeMap<String, String>,
}

impl TypeScriptTypeMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra mappings, consulted before the fixed table.
    pub fn with_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Mapper carrying the `[types]` section of a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::new().with_overrides(manifest.types.clone())
    }

    /// Look up a base type, overrides first.
    pub fn lookup(&self, base: &str) -> Option<&str> {
        self.overrides
            .get(base)
            .map(String::as_str)
            .or_else(|| {
                MYSQL_TO_TS
                    .iter()
                    .find(|(mysql, _)| *mysql == base)
                    .map(|(_, ts)| *ts)
            })
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn map_type(&self, raw_type: &str) -> String {
        let column_type = parse_column_type(raw_type);

        if column_type.base == "enum" {
            return column_type.params.map(enum_union).unwrap_or_default();
        }

        self.lookup(&column_type.base)
            .map(str::to_string)
            .unwrap_or_default()
    }
}
