//! Markdown report generator.
//!
//! Renders the same sections as the summary report, formatted for embedding
//! in documentation or merge-request descriptions.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;
use std::fmt::Write as _;

/// Markdown report generator
#[derive(Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_diff_report(&self, result: &DiffResult) -> Result<String, ReportError> {
        let delimiter = result.summary.delimiter;
        let mut out = String::new();

        writeln!(out, "# CSV Log Diff")?;
        writeln!(out)?;
        writeln!(
            out,
            "`{}` → `{}` ({} → {} rows)",
            result.summary.old_file,
            result.summary.new_file,
            result.summary.old_rows,
            result.summary.new_rows
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "| Added | Removed | Changed |\n|---|---|---|\n| {} | {} | {} |",
            result.summary.rows_added, result.summary.rows_removed, result.summary.rows_changed
        )?;

        if !result.schema.is_match() {
            writeln!(out)?;
            writeln!(out, "## Schema warnings")?;
            writeln!(out)?;
            if !result.schema.only_in_old.is_empty() {
                writeln!(
                    out,
                    "- Columns only in `{}`: {}",
                    result.summary.old_file,
                    result.schema.only_in_old.join(", ")
                )?;
            }
            if !result.schema.only_in_new.is_empty() {
                writeln!(
                    out,
                    "- Columns only in `{}`: {}",
                    result.summary.new_file,
                    result.schema.only_in_new.join(", ")
                )?;
            }
            writeln!(out, "- Unshared columns were excluded from the comparison")?;
        }

        if !result.added.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Added rows ({})", result.added.len())?;
            writeln!(out)?;
            for entry in &result.added {
                writeln!(out, "- `{}`: `{}`", entry.key, entry.row.render(delimiter))?;
            }
        }

        if !result.removed.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Removed rows ({})", result.removed.len())?;
            writeln!(out)?;
            for entry in &result.removed {
                writeln!(out, "- `{}`: `{}`", entry.key, entry.row.render(delimiter))?;
            }
        }

        if !result.changed.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Changed rows ({})", result.changed.len())?;
            writeln!(out)?;
            writeln!(out, "| Key | Column | Old | New |")?;
            writeln!(out, "|---|---|---|---|")?;
            for change in &result.changed {
                for field in &change.fields {
                    writeln!(
                        out,
                        "| {} | {} | {} | {} |",
                        change.key, field.column, field.old, field.new
                    )?;
                }
            }
        }

        if !result.has_changes() {
            writeln!(out)?;
            writeln!(out, "No changes.")?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CsvOptions;
    use crate::diff::DiffEngine;
    use crate::loader::parse_snapshot;
    use crate::model::RowIndex;
    use std::path::Path;

    #[test]
    fn test_markdown_sections() {
        let old = parse_snapshot(
            "id;name\n1;a\n2;b\n",
            Path::new("old.csv"),
            &CsvOptions::default(),
        )
        .unwrap();
        let new = parse_snapshot(
            "id;name\n2;c\n3;d\n",
            Path::new("new.csv"),
            &CsvOptions::default(),
        )
        .unwrap();
        let result = DiffEngine::new().diff(
            &RowIndex::build(&old, "id").unwrap(),
            &RowIndex::build(&new, "id").unwrap(),
        );
        let report = MarkdownReporter::new().generate_diff_report(&result).unwrap();

        assert!(report.starts_with("# CSV Log Diff"));
        assert!(report.contains("## Added rows (1)"));
        assert!(report.contains("## Removed rows (1)"));
        assert!(report.contains("| 2 | name | b | c |"));
    }

    #[test]
    fn test_no_changes_note() {
        let report = MarkdownReporter::new()
            .generate_diff_report(&crate::diff::DiffResult::new())
            .unwrap();
        assert!(report.contains("No changes."));
    }
}
