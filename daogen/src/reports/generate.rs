//! Generate command report data structures.

use std::path::PathBuf;

use daogen_codegen::UnmappedColumn;
use daogen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Table the DAO was generated for.
    pub table: String,
    /// Author stamped into the file.
    pub author: String,
    /// Where the columns came from.
    pub source: String,
    /// Number of columns in the table.
    pub columns: usize,
    /// Columns that fell back under the unmapped type policy.
    pub unmapped: Vec<UnmappedColumn>,
    /// File written or preview.
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    pub write: WriteResult,
}

#[derive(Debug)]
pub struct PreviewResult {
    /// Where the file would be written.
    pub path: PathBuf,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for column in &self.unmapped {
            out.warning(&format!(
                "column '{}' has unmapped type '{}', emitted '{}'",
                column.column, column.raw_type, column.emitted
            ));
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "Generated DAO for {} ({}) from {}",
            self.table, self.author, self.source
        ));
        out.newline();

        let verb = match written.write {
            WriteResult::Created => "Created",
            WriteResult::Overwritten => "Overwrote",
        };
        out.preformatted(&format!(
            "✓ {} {} ({} column{})",
            verb,
            written.path.display(),
            self.columns,
            if self.columns == 1 { "" } else { "s" }
        ));
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        out.divider(&preview.path.display().to_string());
        out.preformatted(&preview.content);

        out.divider("Summary");
        out.preformatted(&format!(
            "1 file would be generated ({} columns)",
            self.columns
        ));
    }
}
