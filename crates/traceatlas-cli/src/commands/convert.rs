//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::commands::validate::execute_validate;
use crate::config::Config;
use crate::documents::{write_atlas, WrittenDocument};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use traceatlas_domain::Atlas;
use traceatlas_extractor::{Extractor, WorkbookSource, XlsxWorkbook};
use tracing::{info, warn};

/// Execute the convert command.
pub fn execute_convert(args: ConvertArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if !config.input.exists() {
        return Err(CliError::InputNotFound(config.input.clone()));
    }

    info!("Reading workbook {}", config.input.display());
    let mut workbook = XlsxWorkbook::open(&config.input)?;
    let (atlas, written) = convert(&mut workbook, config)?;

    println!("{}", formatter.extraction_summary(&atlas.counts()));
    let dangling = atlas.dangling_edges().len();
    if dangling > 0 {
        println!(
            "{}",
            formatter.warning(&format!(
                "{} edge(s) reference an unknown claim or tradition",
                dangling
            ))
        );
    }
    println!("{}", formatter.written_documents(&written));

    if args.validate {
        execute_validate(config, formatter)?;
    }

    Ok(())
}

/// Extract an atlas from any workbook and write its documents.
pub fn convert<W>(workbook: &mut W, config: &Config) -> Result<(Atlas, Vec<WrittenDocument>)>
where
    W: WorkbookSource + ?Sized,
{
    let extractor = Extractor::new(config.extractor_config());
    let atlas = extractor.extract(workbook)?;
    info!("Extracted {}", atlas.counts());

    for edge in atlas.dangling_edges() {
        warn!(
            "Edge {} links claim {} to tradition {}, which do not both resolve",
            edge.id, edge.claim_id, edge.tradition_id
        );
    }

    let written = write_atlas(&atlas, &config.output_dir)?;
    Ok((atlas, written))
}
