use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Excel read error: {0}")]
    Read(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Export not started: write_header must be called first")]
    NotStarted,

    #[error("Export already started: header was already written")]
    AlreadyStarted,

    #[error("Invalid row: {0}")]
    InvalidRow(String),
}
