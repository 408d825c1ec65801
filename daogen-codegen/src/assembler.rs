//! SQL and interface fragment assembly.

use daogen_core::{ColumnDescriptor, OutputFragments};

/// Optional row metadata added to `<Table>DAOWithMeta`.
const META_FIELDS: &[(&str, &str)] = &[("createdAt", "number"), ("updatedAt", "number")];

/// Compose the template fragments for `table` from its ordered columns.
///
/// An empty column list yields degenerate but well-formed strings.
pub fn assemble(table: &str, alias: &str, columns: &[ColumnDescriptor]) -> OutputFragments {
    OutputFragments {
        list_query: list_query(table, alias, columns),
        insert_query: insert_query(table, columns),
        insert_values_expr: insert_values_expr(alias, columns),
        dao_interface_body: dao_interface_body(columns),
        meta_interface_body: meta_interface_body(columns),
        filters_interface_body: "{}".to_string(),
        filters_model_body: filters_model_body(columns),
    }
}

fn list_query(table: &str, alias: &str, columns: &[ColumnDescriptor]) -> String {
    let aliased = columns
        .iter()
        .map(|c| c.aliased_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {} FROM {} {}", aliased, table, alias)
}

fn insert_query(table: &str, columns: &[ColumnDescriptor]) -> String {
    let names = columns
        .iter()
        .map(|c| c.transformed_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("INSERT INTO {}({}) VALUES ?", table, names)
}

fn insert_values_expr(alias: &str, columns: &[ColumnDescriptor]) -> String {
    let values = columns
        .iter()
        .map(|c| c.aliased_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("payload.map(({}) => [{}])", alias, values)
}

fn dao_interface_body(columns: &[ColumnDescriptor]) -> String {
    let mut body = String::from("{ ");
    for column in columns {
        body.push_str(&format!(
            "{}: {};\n ",
            column.transformed_name, column.mapped_type
        ));
    }
    body.push_str(" }");
    body
}

/// Meta fields already present as columns are left to the base interface.
fn meta_interface_body(columns: &[ColumnDescriptor]) -> String {
    let mut body = String::from("{ ");
    for (name, ts) in META_FIELDS {
        if !columns.iter().any(|c| c.transformed_name == *name) {
            body.push_str(&format!("{}?: {};\n ", name, ts));
        }
    }
    body.push_str(" }");
    body
}

fn filters_model_body(columns: &[ColumnDescriptor]) -> String {
    let mut body = String::from("{ ");
    for column in columns {
        body.push_str(&format!(
            "{}: '{} = ?',\n ",
            column.transformed_name, column.aliased_name
        ));
    }
    body.push_str(" }");
    body
}
