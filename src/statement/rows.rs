//! Loosely-typed rows decoded from an uploaded spreadsheet.

use std::collections::HashMap;

use time::Date;

/// A single cell from a decoded spreadsheet row.
///
/// Spreadsheet decoders differ in how much typing they preserve: a CSV
/// reader produces only text, while richer formats can carry native numbers
/// and dates. The normalizer accepts all three and coerces as needed.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A text cell, the common case for CSV input.
    Text(String),
    /// A numeric cell.
    Number(f64),
    /// A native date cell.
    Date(Date),
}

impl CellValue {
    /// The cell rendered as text, used for description fields.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => value.to_string(),
            Self::Date(date) => date.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Date> for CellValue {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

/// An unvalidated row from an uploaded spreadsheet, mapping literal column
/// names to cell values.
///
/// Rows are ephemeral: they exist between decoding and normalization and
/// are never persisted. Column names are stored exactly as they appear in
/// the source file; the normalizer probes a fixed, ordered list of name
/// variants rather than doing any case-insensitive lookup, so `Date` and
/// `date` are distinct keys here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow(HashMap<String, CellValue>);

impl RawRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell under `column`, replacing any existing value.
    pub fn insert(&mut self, column: &str, value: CellValue) {
        self.0.insert(column.to_owned(), value);
    }

    /// Builder-style [RawRow::insert], convenient for tests and literals.
    pub fn with(mut self, column: &str, value: impl Into<CellValue>) -> Self {
        self.insert(column, value.into());
        self
    }

    /// Look up the cell stored under the literal column name `column`.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.0.get(column)
    }

    /// Whether the row has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
