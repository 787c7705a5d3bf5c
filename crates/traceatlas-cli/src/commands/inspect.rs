//! Inspect command implementation.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use traceatlas_extractor::{inspect, XlsxWorkbook};
use tracing::info;

/// Execute the inspect command.
pub fn execute_inspect(config: &Config, formatter: &Formatter) -> Result<()> {
    if !config.input.exists() {
        return Err(CliError::InputNotFound(config.input.clone()));
    }

    let mut workbook = XlsxWorkbook::open(&config.input)?;
    let sheets = inspect(&mut workbook)?;
    info!("Inspected {} sheets in {}", sheets.len(), workbook.path().display());

    println!("{}", formatter.sheet_summaries(&sheets));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_input() {
        let config = Config::default().with_overrides(Some(PathBuf::from("/nonexistent/atlas.xlsx")), None);
        let err = execute_inspect(&config, &Formatter::new(false)).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound(_)));
    }
}
