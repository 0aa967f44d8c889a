use crate::error::{ExportError, ExportResult};
use crate::types::ReadingLog;
use std::path::Path;
use tracing::debug;

/// Supported reading log encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> ExportResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            "json" => Ok(InputFormat::Json),
            _ => Err(ExportError::Parse(format!(
                "Unsupported input format: '{}'. Use .yaml, .yml or .json",
                path.display()
            ))),
        }
    }
}

/// Parse a reading log from a YAML or JSON file
pub fn parse_readings(path: &Path) -> ExportResult<ReadingLog> {
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let log = parse_readings_str(&content, format)?;

    debug!(
        path = %path.display(),
        columns = log.column_count(),
        rows = log.row_count(),
        "parsed reading log"
    );

    Ok(log)
}

/// Parse a reading log from an in-memory document
pub fn parse_readings_str(content: &str, format: InputFormat) -> ExportResult<ReadingLog> {
    let log: ReadingLog = match format {
        InputFormat::Yaml => serde_yaml::from_str(content)?,
        InputFormat::Json => serde_json::from_str(content)?,
    };
    Ok(log)
}
