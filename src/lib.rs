//! netmon-export - network monitor readings to Excel
//!
//! Writes rows of network monitor readings to a spreadsheet in three phases:
//! header, rows, footer. Header cells are bold; connection test outcomes are
//! highlighted green (`PASS`) or red (`FAIL`).
//!
//! # Example
//!
//! ```no_run
//! use netmon_export::config::ExportConfig;
//! use netmon_export::excel::ExcelExport;
//! use netmon_export::export::run_export;
//! use netmon_export::parser::parse_readings;
//! use std::path::Path;
//!
//! let log = parse_readings(Path::new("readings.yaml"))?;
//! let mut exporter = ExcelExport::new(ExportConfig::new("exports"));
//! let summary = run_export(&mut exporter, &log)?;
//!
//! println!("Wrote {} rows to {}", summary.rows_written, summary.path.display());
//! # Ok::<(), netmon_export::error::ExportError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod export;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use config::ExportConfig;
pub use error::{ExportError, ExportResult};
pub use excel::{CellStyle, ExcelExport};
pub use export::{run_export, ExportSummary, TableExport};
pub use types::{ReadingLog, Row};
