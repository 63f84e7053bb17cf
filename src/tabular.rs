//! Conversion between lists of JSON objects and flat header + rows tables.
//!
//! Going from a table back to objects is lossy: every value comes back as a
//! string, so `10` written out as a cell returns as `"10"`.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde_json::Value;

use crate::error::DataError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Treats the first raw row as the header. An empty input gives an empty table.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut rows = rows.into_iter();
        match rows.next() {
            Some(header) => Self {
                header,
                rows: rows.collect(),
            },
            None => Self::default(),
        }
    }

    /// Flattens back into raw rows, header first. A table without columns yields no rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        if self.header.is_empty() {
            return Vec::new();
        }

        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(self.header);
        rows.extend(self.rows);
        rows
    }

    /// Drops rows with blank or missing cells and/or repeated rows, keeping order.
    pub fn clean(self, remove_incomplete: bool, remove_duplicates: bool) -> Self {
        let width = self.header.len();
        let mut seen = HashSet::new();

        let rows = self
            .rows
            .into_iter()
            .filter(|row| {
                !remove_incomplete
                    || (row.len() >= width && row.iter().all(|cell| !cell.is_empty()))
            })
            .filter(|row| !remove_duplicates || seen.insert(row.clone()))
            .collect();

        Self {
            header: self.header,
            rows,
        }
    }
}

/// Builds a table from a JSON array of objects.
///
/// The header is the sorted union of every key; a missing key becomes an empty cell.
pub fn to_table(value: &Value) -> Result<Table, DataError> {
    let items = value
        .as_array()
        .ok_or_else(|| DataError::UnsupportedShape(format!("expected a list of objects, got {}", kind_of(value))))?;

    let objects = items
        .iter()
        .map(|item| {
            item.as_object().ok_or_else(|| {
                DataError::UnsupportedShape(format!("list item is {}, not an object", kind_of(item)))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let header: Vec<String> = objects
        .iter()
        .flat_map(|object| object.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let rows = objects
        .iter()
        .map(|object| {
            header
                .iter()
                .map(|key| object.get(key).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(Table { header, rows })
}

/// Maps each row onto the header. Extra cells are ignored and short rows omit the trailing keys.
pub fn to_objects(table: &Table) -> Vec<BTreeMap<String, String>> {
    table
        .rows
        .iter()
        .map(|row| {
            table
                .header
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect()
        })
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
