//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Only structural problems surface here. Blank or malformed cells are
/// defaulted during normalization and never abort a run.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The workbook could not be opened or a sheet could not be read
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// An expected sheet is absent
    #[error("Sheet not found: {0}")]
    MissingSheet(String),

    /// An expected column is absent from a sheet's header row
    #[error("Column '{column}' not found in sheet '{sheet}'")]
    MissingColumn {
        /// Sheet that was searched
        sheet: String,
        /// Header that was expected
        column: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<calamine::Error> for ExtractorError {
    fn from(e: calamine::Error) -> Self {
        ExtractorError::Workbook(e.to_string())
    }
}
