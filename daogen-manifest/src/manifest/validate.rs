//! Validation context and utilities for manifest parsing.

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// MySQL base types whose TypeScript form is derived, not looked up.
const DERIVED_TYPES: &[&str] = &["enum"];

/// Parsing and validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "daogen.toml");
/// ctx.validate_type_mapping("datetime", "string")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
        }
    }

    /// Find the span of a `[types]` key in the source.
    pub fn find_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key)
    }

    /// Validate one `[types]` entry.
    pub fn validate_type_mapping(&self, name: &str, target: &str) -> Result<()> {
        if let Some(reason) = validate_type_name(name) {
            return Err(self
                .source
                .invalid_type_name_error(name, reason, self.find_span(name)));
        }

        if DERIVED_TYPES.contains(&name) {
            return Err(self.source.validation_error(
                format!(
                    "'{}' cannot be remapped, its type is built from the declared values",
                    name
                ),
                self.find_span(name),
            ));
        }

        if target.trim().is_empty() {
            return Err(self.source.validation_error(
                format!("type mapping for '{}' is empty", name),
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// Validate a MySQL base type name, returning the reason when invalid.
pub(crate) fn validate_type_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("type name cannot be empty"),
        Some(c) if !c.is_ascii_lowercase() => {
            return Some("type name must start with a lowercase letter");
        }
        _ => {}
    }

    if chars.any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')) {
        return Some("type name may only contain lowercase letters, digits and underscores");
    }

    None
}

/// Find the span of a key in the TOML source.
///
/// Looks for `key =` at the start of a line, then `"key" =`, then falls back
/// to the first occurrence of the key anywhere.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        for (prefix_len, candidate) in [(0, key.to_string()), (1, format!("\"{}\"", key))] {
            let is_key = trimmed
                .strip_prefix(candidate.as_str())
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            if is_key {
                return Some(SourceSpan::from((offset + indent + prefix_len, key.len())));
            }
        }

        offset += line.len();
    }

    src.find(key).map(|pos| SourceSpan::from((pos, key.len())))
}
