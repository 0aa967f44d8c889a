//! Three-phase table export
//!
//! Every export runs header, rows, footer in that order. The header opens the
//! output, rows are appended with 1-based row numbers (row 0 holds the
//! header), and the footer flushes and closes the file.

use crate::error::{ExportError, ExportResult};
use crate::excel::CellStyle;
use crate::types::ReadingLog;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Writer for one export file
pub trait TableExport {
    /// Open the output and write the column titles on row 0.
    fn write_header(&mut self, column_names: &[String]) -> ExportResult<()>;

    /// Write one data row at `row_number` (1-based).
    fn write_row(&mut self, row_number: u32, values: &[String]) -> ExportResult<()>;

    /// Flush and close the output.
    fn write_footer(&mut self) -> ExportResult<()>;

    /// Where the export is written
    fn output_path(&self) -> &Path;
}

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows_written: usize,
    pub pass_cells: usize,
    pub fail_cells: usize,
}

/// Drive a full export of `log` through `exporter`.
///
/// When a row fails the footer still runs so the rows already written reach
/// disk; the row error is returned.
pub fn run_export<E>(exporter: &mut E, log: &ReadingLog) -> ExportResult<ExportSummary>
where
    E: TableExport + ?Sized,
{
    exporter.write_header(&log.columns)?;

    let mut summary = ExportSummary {
        path: exporter.output_path().to_path_buf(),
        rows_written: 0,
        pass_cells: 0,
        fail_cells: 0,
    };

    if let Err(row_err) = write_rows(exporter, log, &mut summary) {
        if let Err(close_err) = exporter.write_footer() {
            warn!(error = %close_err, "footer failed after row error");
        }
        return Err(row_err);
    }

    exporter.write_footer()?;

    info!(
        path = %summary.path.display(),
        rows = summary.rows_written,
        pass = summary.pass_cells,
        fail = summary.fail_cells,
        "export complete"
    );

    Ok(summary)
}

fn write_rows<E>(exporter: &mut E, log: &ReadingLog, summary: &mut ExportSummary) -> ExportResult<()>
where
    E: TableExport + ?Sized,
{
    for (idx, row) in log.rows.iter().enumerate() {
        let row_number = u32::try_from(idx + 1)
            .map_err(|_| ExportError::InvalidRow(format!("row index {} out of range", idx + 1)))?;

        exporter.write_row(row_number, row)?;

        summary.rows_written += 1;
        for value in row {
            match CellStyle::for_value(value) {
                CellStyle::Green => summary.pass_cells += 1,
                CellStyle::Red => summary.fail_cells += 1,
                _ => {}
            }
        }
    }
    Ok(())
}
