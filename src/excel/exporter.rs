//! Excel exporter implementation

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};
use crate::excel::style::{CellFormats, CellStyle};
use crate::export::TableExport;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Writes network monitor readings to a single-sheet workbook.
///
/// The workbook is created by `write_header`, filled by `write_row` and saved
/// to disk by `write_footer`. Between those calls it is owned exclusively by
/// this exporter.
pub struct ExcelExport {
    config: ExportConfig,
    path: PathBuf,
    formats: CellFormats,
    workbook: Option<Workbook>,
    column_count: usize,
}

impl ExcelExport {
    /// Create an exporter writing to `config.output_path()`
    pub fn new(config: ExportConfig) -> Self {
        let path = config.output_path();
        Self {
            config,
            path,
            formats: CellFormats::new(),
            workbook: None,
            column_count: 0,
        }
    }

    /// Whether a header has been written and the file is still open
    pub fn is_open(&self) -> bool {
        self.workbook.is_some()
    }

    fn column_index(col: usize) -> ExportResult<u16> {
        u16::try_from(col).map_err(|_| ExportError::Xlsx(XlsxError::RowColumnLimitError))
    }

    /// Write one string cell, logging the cell position on failure
    fn insert_cell(
        worksheet: &mut Worksheet,
        text: &str,
        row: u32,
        col: usize,
        format: Option<&Format>,
    ) -> ExportResult<()> {
        let result = Self::column_index(col).and_then(|col| {
            match format {
                Some(format) => worksheet.write_string_with_format(row, col, text, format),
                None => worksheet.write_string(row, col, text),
            }
            .map(|_| ())
            .map_err(ExportError::from)
        });

        if let Err(e) = &result {
            error!(row, col, text, error = %e, "could not insert cell");
        }
        result
    }
}

impl TableExport for ExcelExport {
    fn write_header(&mut self, column_names: &[String]) -> ExportResult<()> {
        if self.workbook.is_some() {
            return Err(ExportError::AlreadyStarted);
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.config.sheet_name)?;

        if self.config.freeze_rows > 0 || self.config.freeze_columns > 0 {
            worksheet.set_freeze_panes(self.config.freeze_rows, self.config.freeze_columns)?;
        }

        let bold = self.formats.get(CellStyle::Bold);
        for (col, name) in column_names.iter().enumerate() {
            Self::insert_cell(worksheet, name, 0, col, bold)?;
        }

        debug!(
            sheet = %self.config.sheet_name,
            columns = column_names.len(),
            "header written"
        );

        self.column_count = column_names.len();
        self.workbook = Some(workbook);
        Ok(())
    }

    fn write_row(&mut self, row_number: u32, values: &[String]) -> ExportResult<()> {
        let workbook = self.workbook.as_mut().ok_or(ExportError::NotStarted)?;

        if row_number == 0 {
            return Err(ExportError::InvalidRow(
                "row 0 is reserved for the header".to_string(),
            ));
        }

        if values.len() != self.column_count {
            warn!(
                row = row_number,
                values = values.len(),
                columns = self.column_count,
                "row width differs from header"
            );
        }

        let worksheet = workbook.worksheet_from_index(0)?;
        for (col, value) in values.iter().enumerate() {
            let format = self.formats.get(CellStyle::for_value(value));
            Self::insert_cell(worksheet, value, row_number, col, format)?;
        }
        Ok(())
    }

    fn write_footer(&mut self) -> ExportResult<()> {
        let mut workbook = self.workbook.take().ok_or(ExportError::NotStarted)?;
        self.column_count = 0;

        let saved = fs::create_dir_all(&self.config.output_dir)
            .map_err(ExportError::from)
            .and_then(|_| workbook.save(&self.path).map_err(ExportError::from));

        match saved {
            Ok(()) => {
                info!(path = %self.path.display(), "workbook saved");
                Ok(())
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "could not close file");
                Err(e)
            }
        }
    }

    fn output_path(&self) -> &Path {
        &self.path
    }
}
