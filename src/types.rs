use serde::{Deserialize, Deserializer, Serialize};

//==============================================================================
// Rows
//==============================================================================

/// One exported row: ordered cell values, already rendered as text.
pub type Row = Vec<String>;

/// Raw cell as it appears in a reading log.
///
/// Monitors record numbers and flags unquoted, so each cell is accepted as
/// any scalar and rendered to text before it reaches the exporter.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCell {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl RawCell {
    fn into_text(self) -> String {
        match self {
            RawCell::Text(s) => s,
            RawCell::Integer(n) => n.to_string(),
            RawCell::Float(n) => n.to_string(),
            RawCell::Flag(b) => b.to_string(),
        }
    }
}

fn deserialize_rows<'de, D>(deserializer: D) -> Result<Vec<Row>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Vec<Option<RawCell>>> = Deserialize::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map(RawCell::into_text).unwrap_or_default())
                .collect()
        })
        .collect())
}

//==============================================================================
// Reading Log
//==============================================================================

/// Network monitor readings: column titles plus one row per reading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingLog {
    pub columns: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_rows")]
    pub rows: Vec<Row>,
}

impl ReadingLog {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Indices of rows whose width differs from the header
    pub fn ragged_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() != self.columns.len())
            .map(|(idx, _)| idx)
            .collect()
    }
}
