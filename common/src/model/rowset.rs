use serde::{Deserialize, Serialize};

/// A single value of a result row, as the storage engine typed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(v) => Some(*v as f64),
            Cell::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Integer(v)
    }
}

/// Rows returned by a statement together with its output column names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RowSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column, compared case-insensitively like SQLite does.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.eq_ignore_ascii_case(name))
    }

    /// Value of `column` in row `row`.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Every value of one column, in row order.
    pub fn column(&self, name: &str) -> Vec<&Cell> {
        match self.column_index(name) {
            Some(idx) => self.rows.iter().filter_map(|r| r.get(idx)).collect(),
            None => Vec::new(),
        }
    }

    /// First row whose `column` equals `value`.
    pub fn find(&self, column: &str, value: &Cell) -> Option<&[Cell]> {
        let idx = self.column_index(column)?;
        self.rows
            .iter()
            .find(|r| r.get(idx) == Some(value))
            .map(Vec::as_slice)
    }
}

/// Outcome of reading a whole table. An empty table is a normal result,
/// reported separately so the dashboard can show a notice instead of a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableData {
    Rows(RowSet),
    Empty { table: String },
}

impl TableData {
    pub fn rows(&self) -> Option<&RowSet> {
        match self {
            TableData::Rows(set) => Some(set),
            TableData::Empty { .. } => None,
        }
    }
}
