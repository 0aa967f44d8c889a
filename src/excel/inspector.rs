//! Read an exported workbook back

use crate::error::{ExportError, ExportResult};
use crate::excel::style::CellStyle;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Contents of the first worksheet of an exported workbook
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetSummary {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub pass_count: usize,
    pub fail_count: usize,
}

impl SheetSummary {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Reads the first sheet of an .xlsx file as text
pub struct ExcelInspector {
    path: PathBuf,
}

impl ExcelInspector {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn inspect(&self) -> ExportResult<SheetSummary> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| ExportError::Read(format!("Failed to open Excel file: {}", e)))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ExportError::Read("Workbook has no worksheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ExportError::Read(format!("Failed to read '{}': {}", sheet_name, e)))?;

        let mut summary = SheetSummary {
            sheet_name,
            ..Default::default()
        };

        // calamine trims leading blank rows and columns; positions below
        // are absolute so row 0 is always the header.
        let Some((last_row, last_col)) = range.end() else {
            return Ok(summary);
        };

        let row_text = |row: u32| -> Vec<String> {
            (0..=last_col)
                .map(|col| range.get_value((row, col)).map(cell_text).unwrap_or_default())
                .collect()
        };

        let mut columns = row_text(0);
        while columns.last().is_some_and(|c| c.is_empty()) {
            columns.pop();
        }
        summary.columns = columns;

        for row_idx in 1..=last_row {
            let row = row_text(row_idx);
            for value in &row {
                match CellStyle::for_value(value) {
                    CellStyle::Green => summary.pass_count += 1,
                    CellStyle::Red => summary.fail_count += 1,
                    _ => {}
                }
            }
            summary.rows.push(row);
        }

        Ok(summary)
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
