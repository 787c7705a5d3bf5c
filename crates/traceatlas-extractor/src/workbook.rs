//! Workbook access
//!
//! [`WorkbookSource`] is the seam between extraction and the spreadsheet
//! file. [`XlsxWorkbook`] reads real files through `calamine`;
//! [`MemoryWorkbook`] holds tables built in code.

use crate::error::ExtractorError;
use crate::normalize::{cell_list, cell_score, cell_text};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A source of named tables
pub trait WorkbookSource {
    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Read a sheet as a header-indexed table
    fn table(&mut self, name: &str) -> Result<Table, ExtractorError>;
}

/// Position of a column within a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column(usize);

/// A sheet read into memory: one header row plus data rows
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<Data>>,
}

impl Table {
    /// Create a table; rows whose cells are all blank are dropped
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Data>>) -> Self {
        let rows = rows
            .into_iter()
            .filter(|row| row.iter().any(|c| !cell_text(Some(c)).is_empty()))
            .collect();
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Build a table from a `calamine` range whose first row is the header
    pub fn from_range(name: impl Into<String>, range: &Range<Data>) -> Self {
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|header| header.iter().map(|c| cell_text(Some(c))).collect())
            .unwrap_or_default();
        Self::new(name, headers, rows.map(|r| r.to_vec()).collect())
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header row, normalized
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Locate a required column
    pub fn column(&self, header: &str) -> Result<Column, ExtractorError> {
        self.optional_column(header)
            .ok_or_else(|| ExtractorError::MissingColumn {
                sheet: self.name.clone(),
                column: header.to_string(),
            })
    }

    /// Locate a column that may be absent
    pub fn optional_column(&self, header: &str) -> Option<Column> {
        self.headers.iter().position(|h| h == header).map(Column)
    }

    /// Iterate data rows in sheet order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row { cells })
    }
}

/// One data row
///
/// Accessors accept either a [`Column`] or an `Option<Column>`; an absent
/// column reads exactly like a blank cell.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    cells: &'a [Data],
}

impl<'a> Row<'a> {
    /// Raw cell, if the column exists and the row reaches it
    pub fn cell(&self, column: impl Into<Option<Column>>) -> Option<&'a Data> {
        column.into().and_then(|Column(idx)| self.cells.get(idx))
    }

    /// Normalized text of a cell
    pub fn text(&self, column: impl Into<Option<Column>>) -> String {
        cell_text(self.cell(column))
    }

    /// Delimited list in a cell
    pub fn list(&self, column: impl Into<Option<Column>>) -> Vec<String> {
        cell_list(self.cell(column))
    }

    /// Integer score in a cell
    pub fn score(&self, column: impl Into<Option<Column>>) -> i64 {
        cell_score(self.cell(column))
    }
}

/// Workbook backed by an `.xlsx`/`.xls`/`.ods` file
pub struct XlsxWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl XlsxWorkbook {
    /// Open a workbook; the format is chosen from the file extension
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let path = path.as_ref().to_path_buf();
        let sheets = open_workbook_auto(&path)?;
        Ok(Self { path, sheets })
    }

    /// Path the workbook was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkbookSource for XlsxWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn table(&mut self, name: &str) -> Result<Table, ExtractorError> {
        if !self.sheets.sheet_names().iter().any(|s| s == name) {
            return Err(ExtractorError::MissingSheet(name.to_string()));
        }
        let range = self.sheets.worksheet_range(name)?;
        Ok(Table::from_range(name, &range))
    }
}

/// Workbook held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    order: Vec<String>,
    tables: HashMap<String, Table>,
}

impl MemoryWorkbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a sheet
    pub fn insert(&mut self, table: Table) {
        let name = table.name().to_string();
        if !self.tables.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.tables.insert(name, table);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_table(mut self, table: Table) -> Self {
        self.insert(table);
        self
    }

    /// Remove a sheet, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<Table> {
        self.order.retain(|n| n != name);
        self.tables.remove(name)
    }
}

impl WorkbookSource for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.order.clone()
    }

    fn table(&mut self, name: &str) -> Result<Table, ExtractorError> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| ExtractorError::MissingSheet(name.to_string()))
    }
}

/// Shape of one sheet, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    /// Sheet name
    pub name: String,
    /// Header row
    pub headers: Vec<String>,
    /// Number of non-blank data rows
    pub rows: usize,
}

/// Summarize every sheet in a workbook
pub fn inspect<W>(workbook: &mut W) -> Result<Vec<SheetSummary>, ExtractorError>
where
    W: WorkbookSource + ?Sized,
{
    workbook
        .sheet_names()
        .into_iter()
        .map(|name| {
            let table = workbook.table(&name)?;
            Ok(SheetSummary {
                headers: table.headers().to_vec(),
                rows: table.len(),
                name,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    fn table() -> Table {
        Table::new(
            "Sources",
            vec!["SourceID".into(), "Title".into()],
            vec![
                vec![s("S1"), s("Nicene Creed")],
                vec![Data::Empty, s("  ")],
                vec![s("S2")],
            ],
        )
    }

    #[test]
    fn test_blank_rows_dropped() {
        assert_eq!(table().len(), 2);
    }

    #[test]
    fn test_missing_column_is_error() {
        let err = table().column("URL").unwrap_err();
        match err {
            ExtractorError::MissingColumn { sheet, column } => {
                assert_eq!(sheet, "Sources");
                assert_eq!(column, "URL");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_short_rows_and_absent_columns_read_blank() {
        let t = table();
        let title = t.column("Title").unwrap();
        let url = t.optional_column("URL");
        let rows: Vec<Row<'_>> = t.rows().collect();
        assert_eq!(rows[0].text(title), "Nicene Creed");
        assert_eq!(rows[1].text(title), "");
        assert_eq!(rows[0].text(url), "");
        assert!(rows[0].list(url).is_empty());
        assert_eq!(rows[0].score(url), 0);
    }

    #[test]
    fn test_memory_workbook_missing_sheet() {
        let mut wb = MemoryWorkbook::new().with_table(table());
        assert_eq!(wb.sheet_names(), vec!["Sources".to_string()]);
        assert!(matches!(wb.table("Traditions"), Err(ExtractorError::MissingSheet(_))));
        assert!(wb.remove("Sources").is_some());
        assert!(wb.sheet_names().is_empty());
    }

    #[test]
    fn test_inspect() {
        let mut wb = MemoryWorkbook::new().with_table(table());
        let summaries = inspect(&mut wb).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].rows, 2);
        assert_eq!(summaries[0].headers, vec!["SourceID", "Title"]);
    }
}
