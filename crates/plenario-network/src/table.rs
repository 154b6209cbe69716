//! In-memory record table handed over by the enrichment step
//!
//! The table is column-oriented only in its header: rows are stored as
//! vectors of [`Cell`]s aligned with `columns`. Cells stay loosely typed
//! because the enrichment step writes ids as numbers or strings depending on
//! how the records were round-tripped.

use crate::error::{NetworkError, Result};
use plenario_domain::LegislatorId;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

static NULL_CELL: Cell = Cell::Null;

/// One value of the table
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Text(String),
}

impl Cell {
    /// Whether the cell holds no value
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Interpret the cell as an integer
    ///
    /// Accepts integers, integral floats (`204554.0`) and integral text
    /// (`"204554"`).
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(v) => Some(*v),
            Cell::Float(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Some(*v as i64),
            Cell::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Render the cell as text, `None` for null
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Text(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "null"),
            Cell::Bool(v) => write!(f, "{}", v),
            Cell::Integer(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Bool(v) => Cell::Bool(v),
            Value::Number(n) => match n.as_i64() {
                Some(v) => Cell::Integer(v),
                None => n.as_f64().map(Cell::Float).unwrap_or(Cell::Null),
            },
            Value::String(s) => Cell::Text(s),
            // Nested payloads are kept verbatim; no policy reads them
            other => Cell::Text(other.to_string()),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Null)
    }
}

/// Flat table of per-legislator event rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl RecordTable {
    /// Create an empty table with the given columns
    ///
    /// Repeated column names are kept once, at their first position.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for column in columns {
            table.add_column(column.into());
        }
        table
    }

    fn add_column(&mut self, name: String) -> usize {
        if let Some(&position) = self.index.get(&name) {
            return position;
        }
        let position = self.columns.len();
        self.index.insert(name.clone(), position);
        self.columns.push(name);
        for row in &mut self.rows {
            row.push(Cell::Null);
        }
        position
    }

    /// Append a row; its width must match the number of columns
    pub fn push_row<I, C>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let row: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(NetworkError::MalformedRow {
                row: self.rows.len(),
                column: "*".to_string(),
                reason: format!(
                    "expected {} cells, found {}",
                    self.columns.len(),
                    row.len()
                ),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Parse a JSON array of records
    ///
    /// The column set is the union of all record keys in first-seen order;
    /// keys absent from a record read as null.
    ///
    /// # Examples
    ///
    /// ```
    /// use plenario_network::RecordTable;
    ///
    /// let table = RecordTable::from_json_records(r#"[
    ///     {"id_deputado": 1, "titulo": "FrenteX"},
    ///     {"id_deputado": 2, "titulo": "FrenteY", "extra": true}
    /// ]"#).unwrap();
    /// assert_eq!(table.row_count(), 2);
    /// assert_eq!(table.columns(), ["id_deputado", "titulo", "extra"]);
    /// ```
    pub fn from_json_records(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Build a table from an already parsed JSON array of records
    pub fn from_json_value(value: Value) -> Result<Self> {
        let records = match value {
            Value::Array(records) => records,
            other => {
                return Err(NetworkError::Json(format!(
                    "expected an array of records, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut table = Self::default();
        for (position, record) in records.into_iter().enumerate() {
            let fields = match record {
                Value::Object(fields) => fields,
                other => {
                    return Err(NetworkError::Json(format!(
                        "record {} is {}, expected an object",
                        position,
                        json_kind(&other)
                    )))
                }
            };

            let mut row = vec![Cell::Null; table.columns.len()];
            for (key, value) in fields {
                let column = table.add_column(key);
                if column >= row.len() {
                    row.resize(column + 1, Cell::Null);
                }
                row[column] = value.into();
            }
            table.rows.push(row);
        }
        Ok(table)
    }

    /// Column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether the table has a column named `name`
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of column `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Position of column `name`, or `InvalidInput` naming it
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| NetworkError::InvalidInput {
            column: name.to_string(),
        })
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has zero rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Cell at `row`, `column`
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    /// Read a legislator id, failing on null or non-integer values
    pub(crate) fn legislator_id(&self, row: usize, column: usize) -> Result<LegislatorId> {
        let cell = self.cell(row, column).unwrap_or(&NULL_CELL);
        match cell.as_integer() {
            Some(value) => Ok(LegislatorId::new(value)),
            None => Err(self.malformed(row, column, describe(cell, "an integer id"))),
        }
    }

    /// Read a non-null value as text
    pub(crate) fn text(&self, row: usize, column: usize) -> Result<String> {
        let cell = self.cell(row, column).unwrap_or(&NULL_CELL);
        cell.as_text()
            .ok_or_else(|| self.malformed(row, column, describe(cell, "a value")))
    }

    fn malformed(&self, row: usize, column: usize, reason: String) -> NetworkError {
        NetworkError::MalformedRow {
            row,
            column: self.columns.get(column).cloned().unwrap_or_default(),
            reason,
        }
    }
}

fn describe(cell: &Cell, expected: &str) -> String {
    match cell {
        Cell::Null => format!("expected {}, found null", expected),
        other => format!("expected {}, found '{}'", expected, other),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
