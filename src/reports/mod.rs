//! Report generation for diff results.
//!
//! Output formats:
//! - Summary: compact human-readable text for the terminal
//! - Markdown: the same sections for documentation use
//! - JSON: structured data for programmatic integration
//!
//! Renderers only format the [`DiffResult`] they are given; ordering within
//! each section mirrors the engine's sorted-by-key order, so two runs on
//! identical inputs produce byte-identical reports.

mod json;
mod markdown;
mod summary;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;

use crate::diff::DiffResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary
    #[default]
    Auto,
    /// Brief human-readable text output
    Summary,
    /// Human-readable Markdown
    Markdown,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a diff result
    fn generate_diff_report(&self, result: &DiffResult) -> Result<String, ReportError>;

    /// Write a report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Build the reporter for a concrete (non-auto) format.
#[must_use]
pub fn reporter_for(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Auto | ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_round_trip() {
        for format in [
            ReportFormat::Auto,
            ReportFormat::Summary,
            ReportFormat::Markdown,
            ReportFormat::Json,
        ] {
            let shown = format.to_string();
            let parsed = ReportFormat::from_str(&shown, true).unwrap();
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_reporter_for_selects_format() {
        assert_eq!(
            reporter_for(ReportFormat::Json, true).format(),
            ReportFormat::Json
        );
        assert_eq!(
            reporter_for(ReportFormat::Auto, false).format(),
            ReportFormat::Summary
        );
    }
}
