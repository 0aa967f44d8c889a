//! Excel export module
//!
//! - Export: reading log → Excel (.xlsx) with bold headers and pass/fail colors
//! - Inspect: Excel (.xlsx) → sheet summary

mod exporter;
mod inspector;
pub mod style;

pub use exporter::ExcelExport;
pub use inspector::{ExcelInspector, SheetSummary};
pub use style::{CellFormats, CellStyle, CONNECTION_TEST_FAIL, CONNECTION_TEST_PASS};
