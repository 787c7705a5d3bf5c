//! Output formatting for the CLI.

use crate::documents::{DocumentCheck, WrittenDocument};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use traceatlas_domain::AtlasCounts;
use traceatlas_extractor::SheetSummary;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format the list of written documents.
    pub fn written_documents(&self, documents: &[WrittenDocument]) -> String {
        documents
            .iter()
            .map(|d| self.success(&format!("Wrote {} ({} records)", d.path.display(), d.records)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the record counts of an extracted atlas.
    pub fn extraction_summary(&self, counts: &AtlasCounts) -> String {
        self.info(&format!("Extracted {}", counts))
    }

    /// Format a validation report as a table.
    pub fn validation_report(&self, checks: &[DocumentCheck]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["File", "Status", "Records", "Detail"]);

        for check in checks {
            let (status, records, detail) = match &check.outcome {
                Ok(count) => (self.colorize("✓", "green"), count.to_string(), String::new()),
                Err(reason) => (self.colorize("✗", "red"), "-".to_string(), reason.clone()),
            };
            builder.push_record([check.name.to_string(), status, records, detail]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let failed = checks.iter().filter(|c| !c.passed()).count();
        let footer = if failed == 0 {
            self.success("All files valid")
        } else {
            self.error(&format!("{} of {} files failed validation", failed, checks.len()))
        };

        format!("{}\n{}", table, footer)
    }

    /// Format sheet summaries as a table.
    pub fn sheet_summaries(&self, sheets: &[SheetSummary]) -> String {
        if sheets.is_empty() {
            return self.colorize("No sheets found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Sheet", "Rows", "Columns"]);

        for sheet in sheets {
            builder.push_record([sheet.name.clone(), sheet.rows.to_string(), sheet.headers.join(", ")]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }

    #[test]
    fn test_written_documents() {
        let formatter = Formatter::new(false);
        let output = formatter.written_documents(&[WrittenDocument {
            name: "claims.json",
            path: PathBuf::from("out/claims.json"),
            records: 12,
        }]);
        assert_eq!(output, "✓ Wrote out/claims.json (12 records)");
    }

    #[test]
    fn test_validation_report() {
        let formatter = Formatter::new(false);
        let output = formatter.validation_report(&[
            DocumentCheck {
                name: "claims.json",
                outcome: Ok(3),
            },
            DocumentCheck {
                name: "edges.json",
                outcome: Err("not a JSON array".to_string()),
            },
        ]);

        assert!(output.contains("claims.json"));
        assert!(output.contains("✓"));
        assert!(output.contains("✗"));
        assert!(output.contains("not a JSON array"));
        assert!(output.ends_with("✗ 1 of 2 files failed validation"));
    }

    #[test]
    fn test_sheet_summaries() {
        let formatter = Formatter::new(false);
        assert!(formatter.sheet_summaries(&[]).contains("No sheets found"));

        let output = formatter.sheet_summaries(&[SheetSummary {
            name: "Sources".to_string(),
            headers: vec!["SourceID".to_string(), "Title".to_string()],
            rows: 4,
        }]);
        assert!(output.contains("Sources"));
        assert!(output.contains("SourceID, Title"));
    }
}
