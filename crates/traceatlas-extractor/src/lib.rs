//! Traceatlas Extractor
//!
//! Reads the atlas workbook and produces the six record sequences of an
//! [`Atlas`](traceatlas_domain::Atlas).
//!
//! # Overview
//!
//! Every sheet is located by name and every column by header text. Cells are
//! normalized once (see [`normalize`]) and handed to the domain constructors,
//! which apply the classification rules.
//!
//! # Architecture
//!
//! ```text
//! .xlsx → XlsxWorkbook → Table/Row → Extractor → Atlas
//! ```
//!
//! [`WorkbookSource`] is the seam: [`XlsxWorkbook`] reads a real file,
//! [`MemoryWorkbook`] holds tables built in code.
//!
//! # Example Usage
//!
//! ```no_run
//! use traceatlas_extractor::{Extractor, ExtractorConfig, XlsxWorkbook};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut workbook = XlsxWorkbook::open("Global_Church_History_Doctrine_Traceability_Atlas_v4.xlsx")?;
//! let atlas = Extractor::new(ExtractorConfig::default()).extract(&mut workbook)?;
//!
//! println!("Claims: {}", atlas.claims.len());
//! println!("Edges: {}", atlas.edges.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod normalize;
pub mod schema;
mod workbook;


pub use config::{ExtractorConfig, SheetNames};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use workbook::{
    inspect, Column, MemoryWorkbook, Row, SheetSummary, Table, WorkbookSource, XlsxWorkbook,
};
