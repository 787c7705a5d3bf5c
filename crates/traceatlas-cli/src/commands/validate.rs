//! Validate command implementation.

use crate::config::Config;
use crate::documents::{check_documents, DocumentCheck};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;
use tracing::{info, warn};

/// Execute the validate command.
pub fn execute_validate(config: &Config, formatter: &Formatter) -> Result<()> {
    let checks = validate_dir(&config.output_dir);
    println!("{}", formatter.validation_report(&checks));
    ensure_passed(&checks)
}

/// Check every document in a directory.
pub fn validate_dir(dir: &Path) -> Vec<DocumentCheck> {
    info!("Validating documents in {}", dir.display());
    let checks = check_documents(dir);
    for check in checks.iter().filter(|c| !c.passed()) {
        if let Err(reason) = &check.outcome {
            warn!("{} failed validation: {}", check.name, reason);
        }
    }
    checks
}

/// Fold per-file results into a single outcome.
pub fn ensure_passed(checks: &[DocumentCheck]) -> Result<()> {
    let failed = checks.iter().filter(|c| !c.passed()).count();
    if failed > 0 {
        return Err(CliError::ValidationFailed(failed));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_passed() {
        let ok = DocumentCheck {
            name: "claims.json",
            outcome: Ok(2),
        };
        let bad = DocumentCheck {
            name: "edges.json",
            outcome: Err("missing".to_string()),
        };

        assert!(ensure_passed(&[ok.clone()]).is_ok());
        assert!(matches!(
            ensure_passed(&[ok, bad.clone(), bad]),
            Err(CliError::ValidationFailed(2))
        ));
    }

    #[test]
    fn test_empty_directory_fails_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let checks = validate_dir(dir.path());
        assert_eq!(checks.len(), 6);
        assert!(matches!(ensure_passed(&checks), Err(CliError::ValidationFailed(6))));
    }
}
