//! Check operation - configuration and template validation.

use std::path::Path;

use daogen_codegen::{PLACEHOLDERS, Template};
use daogen_core::Result;
use daogen_manifest::DaogenToml;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The manifest has already been parsed and validated when it gets here;
/// this loads the template and checks that every placeholder it uses is one
/// the generator fills.
pub fn check(daogen_toml: Option<&DaogenToml>, template: Option<&Path>) -> Result<CheckReport> {
    let manifest = daogen_toml.map(DaogenToml::manifest);

    let template_path = template.map(Path::to_path_buf).or_else(|| {
        let toml = daogen_toml?;
        let path = toml.manifest().generator.template.as_ref()?;
        Some(toml.resolve(path))
    });

    let template = match &template_path {
        Some(path) => Template::from_file(path)?,
        None => Template::builtin()?,
    };

    let placeholders: Vec<String> = template
        .placeholders()
        .into_iter()
        .map(str::to_string)
        .collect();

    let errors = placeholders
        .iter()
        .filter(|name| !PLACEHOLDERS.contains(&name.as_str()))
        .map(|name| {
            format!(
                "{}: unknown placeholder '{{{{ {} }}}}'",
                template.name(),
                name
            )
        })
        .collect();

    Ok(CheckReport {
        config_path: daogen_toml.map(|t| t.path().to_path_buf()),
        template: template.name().to_string(),
        placeholders,
        type_overrides: manifest
            .map(|m| m.types.clone().into_iter().collect())
            .unwrap_or_default(),
        policy: manifest
            .and_then(|m| m.generator.unmapped_types)
            .unwrap_or_default(),
        errors,
    })
}
