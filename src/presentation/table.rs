//! The ISS tabular JSON convention.
//!
//! Every logical table in an ISS response arrives as an ordered `columns`
//! name list plus a `data` list of positional value rows. Reconstructing
//! named fields means zipping each row against the column list; that zip
//! lives here and nowhere else.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One logical table of an ISS response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssTable {
    /// Ordered field names
    #[serde(default)]
    pub columns: Vec<String>,
    /// Positional value rows, one per record
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}

impl IssTable {
    /// Zips the first non-degenerate row against the column names.
    ///
    /// # Returns
    /// `None` when the table has no rows or the first row is empty, which
    /// is how ISS reports an unknown or untraded security.
    pub fn first_record(&self) -> Option<IssRecord> {
        self.data
            .first()
            .filter(|row| !row.is_empty())
            .map(|row| IssRecord::from_row(&self.columns, row))
    }

    /// Iterates over all rows as field-keyed records, skipping empty rows.
    pub fn records(&self) -> impl Iterator<Item = IssRecord> + '_ {
        self.data
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| IssRecord::from_row(&self.columns, row))
    }
}

/// A single table row zipped against its column names.
#[derive(Debug, Clone, Default)]
pub struct IssRecord {
    fields: HashMap<String, Value>,
}

impl IssRecord {
    /// Pairs column names with row values positionally. A short row yields
    /// fewer fields; surplus cells without a column name are dropped.
    fn from_row(columns: &[String], row: &[Value]) -> Self {
        let fields = columns.iter().cloned().zip(row.iter().cloned()).collect();
        Self { fields }
    }

    /// Numeric field value, `None` when missing, null, or non-numeric.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(Value::as_f64)
    }

    /// String field value, `None` when missing, null, or not a string.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Integer field value, `None` when missing, null, or fractional.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.fields.get(name).and_then(Value::as_i64)
    }
}
