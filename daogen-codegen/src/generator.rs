//! DAO generator: columns in, rendered TypeScript file out.

use std::path::{Path, PathBuf};

use daogen_core::{
    ColumnDescriptor, Error, File, GenerationRequest, OutputFragments, RawColumn, Result,
    WriteResult, table_alias, today,
};
use daogen_manifest::UnmappedTypePolicy;
use tracing::{debug, warn};

use crate::{
    assembler::assemble,
    template::{Template, TemplateValues},
    type_mapper::{TypeMapper, TypeScriptTypeMapper, parse_column_type},
};

/// Every placeholder a DAO template may use.
pub const PLACEHOLDERS: &[&str] = &[
    "class_name",
    "author",
    "date",
    "interface_name",
    "interface_with_meta_name",
    "list_filters_name",
    "table_alias",
    "dao_interface",
    "meta_interface",
    "filters_interface",
    "filters_model",
    "list_query",
    "insert_query",
    "insert_values",
];

/// Annotation emitted for unmapped types under [`UnmappedTypePolicy::Unknown`].
const UNKNOWN_TYPE: &str = "unknown";

/// A column whose type the mapper did not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedColumn {
    pub column: String,
    pub raw_type: String,
    /// The annotation that was emitted instead
    pub emitted: String,
}

/// A rendered DAO file that has not been written yet.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
    /// Resolved columns, in catalog order
    pub columns: Vec<ColumnDescriptor>,
    /// Columns that fell back under the unmapped type policy
    pub unmapped: Vec<UnmappedColumn>,
}

/// Result of writing a DAO file
#[derive(Debug)]
pub struct GenerateResult {
    pub path: PathBuf,
    pub write: WriteResult,
    pub columns: usize,
    pub unmapped: Vec<UnmappedColumn>,
}

/// Generates a TypeScript DAO for one table.
pub struct Generator {
    request: GenerationRequest,
    mapper: TypeScriptTypeMapper,
    policy: UnmappedTypePolicy,
    template: Template,
    date: String,
}

impl Generator {
    /// Generator with the fixed type table, the `error` policy and today's date.
    pub fn new(request: GenerationRequest, template: Template) -> Self {
        Self {
            request,
            mapper: TypeScriptTypeMapper::new(),
            policy: UnmappedTypePolicy::default(),
            template,
            date: today(),
        }
    }

    pub fn with_mapper(mut self, mapper: TypeScriptTypeMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn with_policy(mut self, policy: UnmappedTypePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the date stamped into the file (already formatted).
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// `<Table>.ts`
    pub fn file_name(&self) -> String {
        format!("{}.ts", self.request.table_name)
    }

    /// Resolve catalog columns, applying the unmapped type policy.
    pub fn resolve_columns(
        &self,
        raw: &[RawColumn],
    ) -> Result<(Vec<ColumnDescriptor>, Vec<UnmappedColumn>)> {
        let alias = table_alias(&self.request.table_name);
        let mut columns = Vec::with_capacity(raw.len());
        let mut unmapped = Vec::new();

        for column in raw {
            let mut mapped = self.mapper.map_type(&column.column_type);

            if mapped.is_empty() {
                let base = parse_column_type(&column.column_type).base;
                mapped = match self.policy {
                    UnmappedTypePolicy::Error => {
                        return Err(Box::new(Error::UnmappedType {
                            column: column.name.clone(),
                            raw_type: column.column_type.clone(),
                            base,
                        }));
                    }
                    UnmappedTypePolicy::Empty => String::new(),
                    UnmappedTypePolicy::Unknown => UNKNOWN_TYPE.to_string(),
                };
                warn!(
                    "Column '{}' has unmapped type '{}', emitting '{}'",
                    column.name, column.column_type, mapped
                );
                unmapped.push(UnmappedColumn {
                    column: column.name.clone(),
                    raw_type: column.column_type.clone(),
                    emitted: mapped.clone(),
                });
            }

            columns.push(ColumnDescriptor::new(column, &alias, mapped));
        }

        Ok((columns, unmapped))
    }

    /// The values every template placeholder is filled from.
    pub fn template_values(&self, fragments: OutputFragments) -> TemplateValues {
        let request = &self.request;
        let mut values = TemplateValues::new();
        values
            .set("class_name", &request.table_name)
            .set("author", &request.author_label)
            .set("date", &self.date)
            .set("interface_name", request.interface_name())
            .set("interface_with_meta_name", request.interface_with_meta_name())
            .set("list_filters_name", request.list_filters_name())
            .set("table_alias", table_alias(&request.table_name))
            .set("dao_interface", fragments.dao_interface_body)
            .set("meta_interface", fragments.meta_interface_body)
            .set("filters_interface", fragments.filters_interface_body)
            .set("filters_model", fragments.filters_model_body)
            .set("list_query", fragments.list_query)
            .set("insert_query", fragments.insert_query)
            .set("insert_values", fragments.insert_values_expr);
        values
    }

    /// Render the DAO without writing it.
    pub fn preview(&self, raw: &[RawColumn]) -> Result<PreviewFile> {
        let (columns, unmapped) = self.resolve_columns(raw)?;
        let alias = table_alias(&self.request.table_name);

        let fragments = assemble(&self.request.table_name, &alias, &columns);
        debug!("Assembled fragments: {}", fragments.list_query);

        let content = self.template.render(&self.template_values(fragments))?;

        Ok(PreviewFile {
            path: self.file_name(),
            content,
            columns,
            unmapped,
        })
    }

    /// Render the DAO and write it into `output_dir`, replacing any previous file.
    pub fn generate(&self, raw: &[RawColumn], output_dir: &Path) -> Result<GenerateResult> {
        let preview = self.preview(raw)?;
        let path = output_dir.join(&preview.path);
        let write = File::new(&path, preview.content).write()?;

        debug!("Wrote {} ({:?})", path.display(), write);

        Ok(GenerateResult {
            path,
            write,
            columns: preview.columns.len(),
            unmapped: preview.unmapped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(template: &str) -> Generator {
        Generator::new(
            GenerationRequest::new("Users", "Jane Doe"),
            Template::parse("test", template).unwrap(),
        )
        .with_date("8 June 2021")
    }

    fn users() -> Vec<RawColumn> {
        vec![
            RawColumn::new("ID", "int"),
            RawColumn::new("NAME", "varchar(50)"),
        ]
    }

    #[test]
    fn test_users_end_to_end() {
        let generator = generator("{{ dao_interface }}");
        let preview = generator.preview(&users()).unwrap();

        assert_eq!(preview.path, "Users.ts");
        assert_eq!(preview.content, "{ id: number;\n name: string;\n  }");

        let names: Vec<_> = preview
            .columns
            .iter()
            .map(|c| c.transformed_name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "name"]);
        assert!(preview.unmapped.is_empty());
    }

    #[test]
    fn test_all_placeholders_have_values() {
        let generator = generator("");
        let values = generator.template_values(OutputFragments::default());
        let names: Vec<_> = values.names().collect();

        for placeholder in Template::builtin().unwrap().placeholders() {
            assert!(names.contains(&placeholder), "no value for {placeholder}");
        }

        let mut known = PLACEHOLDERS.to_vec();
        known.sort_unstable();
        assert_eq!(names, known);
        assert_eq!(values.get("table_alias"), Some("u"));
        assert_eq!(values.get("date"), Some("8 June 2021"));
    }

    #[test]
    fn test_unmapped_type_errors_by_default() {
        let generator = generator("{{ dao_interface }}");
        let err = generator
            .preview(&[RawColumn::new("createdOn", "datetime")])
            .unwrap_err();

        match *err {
            Error::UnmappedType {
                ref column,
                ref raw_type,
                ref base,
            } => {
                assert_eq!(column, "createdOn");
                assert_eq!(raw_type, "datetime");
                assert_eq!(base, "datetime");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unmapped_type_policies() {
        let raw = [RawColumn::new("createdOn", "datetime(6)")];

        let preview = generator("{{ dao_interface }}")
            .with_policy(UnmappedTypePolicy::Empty)
            .preview(&raw)
            .unwrap();
        assert_eq!(preview.content, "{ createdOn: ;\n  }");
        assert_eq!(preview.unmapped[0].emitted, "");

        let preview = generator("{{ dao_interface }}")
            .with_policy(UnmappedTypePolicy::Unknown)
            .preview(&raw)
            .unwrap();
        assert_eq!(preview.content, "{ createdOn: unknown;\n  }");
        assert_eq!(preview.unmapped[0].raw_type, "datetime(6)");
    }

    #[test]
    fn test_mapper_overrides_apply() {
        let mapper = TypeScriptTypeMapper::new().with_overrides(
            [("datetime".to_string(), "string".to_string())]
                .into_iter()
                .collect(),
        );
        let preview = generator("{{ dao_interface }}")
            .with_mapper(mapper)
            .preview(&[RawColumn::new("createdOn", "datetime")])
            .unwrap();
        assert_eq!(preview.content, "{ createdOn: string;\n  }");
    }
}
