//! Column model shared by the catalog reader and the generator.

use serde::{Deserialize, Serialize};

use crate::naming::to_camel_case;

/// A column as reported by the catalog, before any transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawColumn {
    /// `COLUMN_NAME`
    pub name: String,
    /// `COLUMN_TYPE`, e.g. `varchar(255)` or `enum('a','b')`
    pub column_type: String,
    /// `IS_NULLABLE = 'YES'`
    #[serde(default)]
    pub is_nullable: bool,
    /// `COLUMN_DEFAULT`
    #[serde(default)]
    pub default: Option<String>,
}

impl RawColumn {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            is_nullable: false,
            default: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A fully resolved column, ready for fragment assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub raw_name: String,
    pub raw_type: String,
    pub is_nullable: bool,
    pub default_value: Option<String>,
    /// Field name used in the generated interfaces and SQL.
    pub transformed_name: String,
    /// `<alias>.<transformed_name>`
    pub aliased_name: String,
    /// TypeScript annotation for the field.
    pub mapped_type: String,
}

impl ColumnDescriptor {
    /// Resolve a catalog column against the table alias and its mapped type.
    pub fn new(raw: &RawColumn, alias: &str, mapped_type: impl Into<String>) -> Self {
        let transformed_name = to_camel_case(&raw.name);
        Self {
            raw_name: raw.name.clone(),
            raw_type: raw.column_type.clone(),
            is_nullable: raw.is_nullable,
            default_value: raw.default.clone(),
            aliased_name: format!("{}.{}", alias, transformed_name),
            transformed_name,
            mapped_type: mapped_type.into(),
        }
    }
}

/// What to generate and for whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub table_name: String,
    pub author_label: String,
}

impl GenerationRequest {
    pub fn new(table_name: impl Into<String>, author_label: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            author_label: author_label.into(),
        }
    }

    /// `<Table>DAO`
    pub fn interface_name(&self) -> String {
        format!("{}DAO", self.table_name)
    }

    /// `<Table>DAOWithMeta`
    pub fn interface_with_meta_name(&self) -> String {
        format!("{}DAOWithMeta", self.table_name)
    }

    /// `<Table>ListFilters`
    pub fn list_filters_name(&self) -> String {
        format!("{}ListFilters", self.table_name)
    }
}

/// The strings substituted into the DAO template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputFragments {
    pub list_query: String,
    pub insert_query: String,
    pub insert_values_expr: String,
    pub dao_interface_body: String,
    /// Bookkeeping fields the table does not already declare
    pub meta_interface_body: String,
    pub filters_interface_body: String,
    pub filters_model_body: String,
}
