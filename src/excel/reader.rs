//! Workbook reader implementation - Excel (.xlsx) → test cases

use crate::error::{TranscodeError, TranscodeResult};
use crate::schema;
use crate::types::ConvCase;
use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use std::path::{Path, PathBuf};

/// Scan result for one sheet.
#[derive(Debug)]
pub struct CaseSheet {
    /// Cases in source row order, sentinel-skipped rows excluded.
    pub cases: Vec<ConvCase>,
    /// Name of the sheet that was read.
    pub sheet_name: String,
    /// Total rows scanned, including skipped ones.
    pub rows_scanned: usize,
    /// Rows dropped by the `in_h` sentinel.
    pub rows_skipped: usize,
}

/// Reader for converting a test-matrix workbook into convolution cases.
pub struct CaseReader {
    path: PathBuf,
    sheet: Option<String>,
}

impl CaseReader {
    /// Create a reader for the workbook at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet: None,
        }
    }

    /// Read a named sheet instead of the workbook's first sheet.
    pub fn with_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheet = Some(name.into());
        self
    }

    /// Open the workbook and scan every row of the selected sheet.
    pub fn read(&self) -> TranscodeResult<CaseSheet> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| TranscodeError::Workbook(format!("Failed to open Excel file: {}", e)))?;

        let sheet_name = match &self.sheet {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| TranscodeError::Workbook("workbook has no sheets".to_string()))?,
        };

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| match e {
            XlsxError::WorksheetNotFound(name) => TranscodeError::SheetNotFound(name),
            other => TranscodeError::Workbook(other.to_string()),
        })?;

        scan_range(sheet_name, &range)
    }
}

/// Scan all rows of a sheet range, applying the sentinel and the defaults.
fn scan_range(sheet_name: String, range: &Range<Data>) -> TranscodeResult<CaseSheet> {
    // Populated width covers the whole range regardless of where it starts;
    // an entirely blank sheet fails the width check with "0 columns".
    let width = range.end().map(|(_, col)| col + 1).unwrap_or(0);
    schema::validate_width(width)?;

    // end() is Some here, validate_width rejected the blank sheet.
    let last_row = range.end().map(|(row, _)| row).unwrap_or(0);

    let mut cases = Vec::new();
    let mut rows_skipped = 0usize;

    for row in 0..=last_row {
        let cells: [Data; schema::COLUMN_COUNT] = std::array::from_fn(|idx| {
            range
                .get_value((row, schema::SCHEMA[idx].column - 1))
                .cloned()
                .unwrap_or(Data::Empty)
        });

        match ConvCase::from_cells(&cells) {
            Some(case) => cases.push(case),
            None => rows_skipped += 1,
        }
    }

    Ok(CaseSheet {
        cases,
        sheet_name,
        rows_scanned: last_row as usize + 1,
        rows_skipped,
    })
}
