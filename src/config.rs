//! Export configuration
//!
//! The exported file always carries the same name; only the directory it
//! lands in and the worksheet title are configurable.

use std::path::PathBuf;

/// Fixed name of the exported workbook
pub const EXPORT_FILE_NAME: &str = "networkmonitor.xlsx";

/// Worksheet title used when none is configured
pub const DEFAULT_SHEET_NAME: &str = "Network Monitor";

/// Exporter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub sheet_name: String,
    /// Rows kept visible while scrolling (the header)
    pub freeze_rows: u32,
    /// Columns kept visible while scrolling
    pub freeze_columns: u16,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            freeze_rows: 1,
            freeze_columns: 2,
        }
    }
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    pub fn with_freeze(mut self, rows: u32, columns: u16) -> Self {
        self.freeze_rows = rows;
        self.freeze_columns = columns;
        self
    }

    /// Full path of the exported workbook
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(EXPORT_FILE_NAME)
    }
}
