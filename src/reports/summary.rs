//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable report for terminal usage. Color is
//! cosmetic only; the text is identical with color disabled.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(&self, result: &DiffResult) -> Result<String, ReportError> {
        let delimiter = result.summary.delimiter;
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("CSV Log Diff", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            result.summary.old_file,
            result.summary.new_file
        ));
        lines.push(format!(
            "{}   {} → {} rows",
            self.color("Rows:", "cyan"),
            result.summary.old_rows,
            result.summary.new_rows
        ));

        // Anomalies observed while loading and indexing
        if !result.schema.only_in_old.is_empty() {
            lines.push(format!(
                "{} columns only in {}: {}",
                self.color("Schema:", "yellow"),
                result.summary.old_file,
                result.schema.only_in_old.join(", ")
            ));
        }
        if !result.schema.only_in_new.is_empty() {
            lines.push(format!(
                "{} columns only in {}: {}",
                self.color("Schema:", "yellow"),
                result.summary.new_file,
                result.schema.only_in_new.join(", ")
            ));
        }
        if !result.schema.is_match() {
            lines.push(format!(
                "{} unshared columns are excluded from the comparison",
                self.color("Schema:", "yellow"),
            ));
        }
        for (count, file) in [
            (result.summary.duplicate_keys_old, &result.summary.old_file),
            (result.summary.duplicate_keys_new, &result.summary.new_file),
        ] {
            if count > 0 {
                lines.push(format!(
                    "{} {count} duplicate {} in {file} (last occurrence kept)",
                    self.color("Keys:", "yellow"),
                    if count == 1 { "key" } else { "keys" }
                ));
            }
        }

        lines.push(String::new());

        // Added
        if result.added.is_empty() {
            lines.push(format!("Added rows: {}", self.color("none", "dim")));
        } else {
            lines.push(format!(
                "{} ({}):",
                self.color("Added rows", "bold"),
                result.added.len()
            ));
            for entry in &result.added {
                lines.push(format!(
                    "  {} {}: {}",
                    self.color("+", "green"),
                    entry.key,
                    entry.row.render(delimiter)
                ));
            }
        }

        // Removed
        if result.removed.is_empty() {
            lines.push(format!("Removed rows: {}", self.color("none", "dim")));
        } else {
            lines.push(format!(
                "{} ({}):",
                self.color("Removed rows", "bold"),
                result.removed.len()
            ));
            for entry in &result.removed {
                lines.push(format!(
                    "  {} {}: {}",
                    self.color("-", "red"),
                    entry.key,
                    entry.row.render(delimiter)
                ));
            }
        }

        // Changed
        if result.changed.is_empty() {
            lines.push(format!("Changed rows: {}", self.color("none", "dim")));
        } else {
            lines.push(format!(
                "{} ({}):",
                self.color("Changed rows", "bold"),
                result.changed.len()
            ));
            for change in &result.changed {
                lines.push(format!("  {} {}:", self.color("*", "yellow"), change.key));
                for field in &change.fields {
                    lines.push(format!(
                        "      {}: '{}' -> '{}'",
                        field.column, field.old, field.new
                    ));
                }
                lines.push(format!("    OLD: {}", change.old_row.render(delimiter)));
                lines.push(format!("    NEW: {}", change.new_row.render(delimiter)));
            }
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
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

    fn result() -> DiffResult {
        let old = parse_snapshot(
            "id;name\n1;a\n2;b\n",
            Path::new("old.csv"),
            &CsvOptions::default(),
        )
        .unwrap();
        let new = parse_snapshot(
            "id;name\n1;a\n2;c\n3;d\n",
            Path::new("new.csv"),
            &CsvOptions::default(),
        )
        .unwrap();
        DiffEngine::new().diff(
            &RowIndex::build(&old, "id").unwrap(),
            &RowIndex::build(&new, "id").unwrap(),
        )
    }

    #[test]
    fn test_summary_sections() {
        let report = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&result())
            .unwrap();
        assert!(report.contains("Files:  old.csv → new.csv"));
        assert!(report.contains("Added rows (1):"));
        assert!(report.contains("+ 3: 3;d"));
        assert!(report.contains("Removed rows: none"));
        assert!(report.contains("name: 'b' -> 'c'"));
        assert!(report.contains("OLD: 2;b"));
        assert!(report.contains("NEW: 2;c"));
    }

    #[test]
    fn test_no_color_output_has_no_escapes() {
        let report = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&result())
            .unwrap();
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_colored_output_same_text() {
        let plain = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&result())
            .unwrap();
        let colored = SummaryReporter::new().generate_diff_report(&result()).unwrap();
        let stripped: String = {
            // Strip ANSI sequences naively: ESC '[' ... terminal byte 'm'
            let mut out = String::new();
            let mut chars = colored.chars();
            while let Some(c) = chars.next() {
                if c == '\x1b' {
                    for t in chars.by_ref() {
                        if t == 'm' {
                            break;
                        }
                    }
                } else {
                    out.push(c);
                }
            }
            out
        };
        assert_eq!(plain, stripped);
    }
}
