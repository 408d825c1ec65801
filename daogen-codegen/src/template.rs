//! `{{ name }}` placeholder templates.
//!
//! Rendering is strict: every placeholder must have a value, and malformed
//! placeholders are reported with a span into the template source.

use std::{collections::BTreeMap, ops::Range, path::Path};

use daogen_core::{Error, Result};
use miette::SourceSpan;

/// The DAO template shipped with daogen.
pub const BUILTIN_TEMPLATE: &str = include_str!("../templates/dao.template.txt");

/// Display name of the built-in template in diagnostics.
pub const BUILTIN_TEMPLATE_NAME: &str = "<builtin>/dao.template.txt";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(Range<usize>),
    Placeholder { name: String, span: SourceSpan },
}

/// A parsed template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    source: String,
    segments: Vec<Segment>,
}

/// Values substituted into a template, keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues(BTreeMap<String, String>);

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Template {
    /// Parse template source.
    pub fn parse(name: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let source = source.into();
        let segments = parse_segments(&source, &name)?;
        Ok(Self {
            name,
            source,
            segments,
        })
    }

    /// The embedded DAO template.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_TEMPLATE_NAME, BUILTIN_TEMPLATE)
    }

    /// Read and parse a template file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::TemplateMissing {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::parse(path.display().to_string(), source)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder { name, .. } = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute every placeholder.
    ///
    /// Fails on the first placeholder without a value.
    pub fn render(&self, values: &TemplateValues) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(range) => out.push_str(&self.source[range.clone()]),
                Segment::Placeholder { name, span } => match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(Error::template(
                            format!("no value for placeholder '{}'", name),
                            &self.source,
                            &self.name,
                            Some(*span),
                        ));
                    }
                },
            }
        }
        Ok(out)
    }
}

fn parse_segments(src: &str, name: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while let Some(found) = src[pos..].find(OPEN) {
        let start = pos + found;
        if start > pos {
            segments.push(Segment::Text(pos..start));
        }

        let inner_start = start + OPEN.len();
        let Some(close) = src[inner_start..].find(CLOSE) else {
            return Err(Error::template(
                "unclosed placeholder",
                src,
                name,
                Some((start, OPEN.len()).into()),
            ));
        };
        let end = inner_start + close + CLOSE.len();
        let span = SourceSpan::from((start, end - start));

        let key = src[inner_start..inner_start + close].trim();
        if !is_placeholder_name(key) {
            return Err(Error::template(
                format!("invalid placeholder name '{}'", key),
                src,
                name,
                Some(span),
            ));
        }

        segments.push(Segment::Placeholder {
            name: key.to_string(),
            span,
        });
        pos = end;
    }

    if pos < src.len() {
        segments.push(Segment::Text(pos..src.len()));
    }

    Ok(segments)
}

/// `[a-z_][a-z0-9_]*`
fn is_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn values(pairs: &[(&str, &str)]) -> TemplateValues {
        let mut values = TemplateValues::new();
        for (name, value) in pairs {
            values.set(*name, *value);
        }
        values
    }

    #[test]
    fn test_render() {
        let template = Template::parse("t", "class {{ class_name }} { {{author}} }").unwrap();
        let out = template
            .render(&values(&[("class_name", "Users"), ("author", "Jane")]))
            .unwrap();
        assert_eq!(out, "class Users { Jane }");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let template = Template::parse("t", "{{ a }}").unwrap();
        let out = template.render(&values(&[("a", "{{ b }}")])).unwrap();
        assert_eq!(out, "{{ b }}");
    }

    #[test]
    fn test_missing_value_points_at_placeholder() {
        let src = "SELECT {{ list_query }};";
        let template = Template::parse("dao.template.txt", src).unwrap();
        let err = template.render(&TemplateValues::new()).unwrap_err();

        match *err {
            Error::Template {
                span: Some(span),
                ref message,
                ..
            } => {
                assert_eq!(message, "no value for placeholder 'list_query'");
                assert_eq!(
                    &src[span.offset()..span.offset() + span.len()],
                    "{{ list_query }}"
                );
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_placeholder() {
        let err = Template::parse("t", "a {{ b").unwrap_err();
        match *err {
            Error::Template { span, .. } => assert_eq!(span, Some(SourceSpan::from((2, 2)))),
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_placeholder_name() {
        let err = Template::parse("t", "{{ Class-Name }}").unwrap_err();
        assert!(err.to_string().contains("invalid placeholder name 'Class-Name'"));
        assert!(Template::parse("t", "{{ }}").is_err());
    }

    #[test]
    fn test_placeholders_in_order() {
        let template = Template::parse("t", "{{ b }} {{ a }} {{ b }}").unwrap();
        assert_eq!(template.placeholders(), vec!["b", "a"]);
    }

    #[test]
    fn test_builtin_template_parses() {
        let template = Template::builtin().unwrap();
        let placeholders = template.placeholders();
        for name in ["class_name", "author", "date", "dao_interface", "list_query"] {
            assert!(placeholders.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dao.template.txt");
        std::fs::write(&path, "export default {{ class_name }};\n").unwrap();

        let template = Template::from_file(&path).unwrap();
        assert_eq!(template.placeholders(), vec!["class_name"]);

        let err = Template::from_file(temp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(*err, Error::TemplateMissing { .. }));
    }
}
