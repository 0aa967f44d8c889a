//! Cell style selection
//!
//! Header cells are bold. Data cells holding a connection test outcome are
//! colored green (pass) or red (fail); everything else keeps the default
//! format.

use rust_xlsxwriter::{Color, Format};

/// Connection test passed
pub const CONNECTION_TEST_PASS: &str = "PASS";

/// Connection test failed
pub const CONNECTION_TEST_FAIL: &str = "FAIL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    Default,
    Bold,
    Red,
    Green,
}

impl CellStyle {
    /// Style of a data cell, chosen from its value alone.
    ///
    /// Sentinels match exactly: `"pass"` or `" PASS"` stay default.
    pub fn for_value(value: &str) -> Self {
        match value {
            CONNECTION_TEST_PASS => CellStyle::Green,
            CONNECTION_TEST_FAIL => CellStyle::Red,
            _ => CellStyle::Default,
        }
    }

    /// Library format for this style, `None` for the default format
    pub fn format(self) -> Option<Format> {
        CellFormats::new().get(self).cloned()
    }
}

/// Formats built once per export and shared by every cell
#[derive(Debug, Clone)]
pub struct CellFormats {
    bold: Format,
    red: Format,
    green: Format,
}

impl CellFormats {
    pub fn new() -> Self {
        Self {
            bold: Format::new().set_bold(),
            red: Format::new().set_font_color(Color::Red),
            green: Format::new().set_font_color(Color::Green),
        }
    }

    pub fn get(&self, style: CellStyle) -> Option<&Format> {
        match style {
            CellStyle::Default => None,
            CellStyle::Bold => Some(&self.bold),
            CellStyle::Red => Some(&self.red),
            CellStyle::Green => Some(&self.green),
        }
    }
}

impl Default for CellFormats {
    fn default() -> Self {
        Self::new()
    }
}
