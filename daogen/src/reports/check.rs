//! Check command report data structures.

use std::path::PathBuf;

use daogen_manifest::UnmappedTypePolicy;

use super::output::{Output, Report};

/// Report data from configuration and template validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to daogen.toml, if one was used.
    pub config_path: Option<PathBuf>,
    /// Template display name.
    pub template: String,
    /// Placeholders the template uses, in order of appearance.
    pub placeholders: Vec<String>,
    /// Extra type mappings.
    pub type_overrides: Vec<(String, String)>,
    /// Effective unmapped type policy from the file.
    pub policy: UnmappedTypePolicy,
    /// Error messages.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        if !self.is_valid() {
            return;
        }

        match &self.config_path {
            Some(path) => out.preformatted(&format!("✓ {} is valid", path.display())),
            None => out.preformatted("✓ no daogen.toml found, using defaults"),
        }
        out.newline();

        out.key_value("Template", &self.template);
        out.key_value("Placeholders", &self.placeholders.len().to_string());
        out.key_value("Unmapped types", self.policy.as_str());

        if !self.type_overrides.is_empty() {
            out.newline();
            out.section(&format!("Type mappings ({})", self.type_overrides.len()));
            for (mysql, ts) in &self.type_overrides {
                out.list_item(&format!("{} -> {}", mysql, ts));
            }
        }
    }
}
