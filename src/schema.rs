//! Sheet schema: raw rows as they come off the CSV export, and the single
//! mapping from sheet headers to the fields the pipeline reads.

use serde::Deserialize;
use std::collections::HashMap;

use crate::constants;

/// Header names for every field the pipeline reads.
///
/// A renamed column in the sheet is a one-line change here (or in `[columns]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub story: String,
    pub identifier: String,
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub phone: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            story: constants::STORY_COLUMN.to_string(),
            identifier: constants::IDENTIFIER_COLUMN.to_string(),
            name: constants::NAME_COLUMN.to_string(),
            email: constants::EMAIL_COLUMN.to_string(),
            linkedin: constants::LINKEDIN_COLUMN.to_string(),
            phone: constants::PHONE_COLUMN.to_string(),
        }
    }
}

/// One record of the sheet, keyed by header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    pub fn new(cells: HashMap<String, String>) -> Self {
        Self { cells }
    }

    /// Raw cell value, `None` when the column is absent or the cell holds a
    /// missing-value token.
    pub fn field(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(String::as_str)
            .filter(|value| !is_missing_token(value))
    }

    /// Trimmed cell value, empty when missing.
    pub fn text(&self, column: &str) -> String {
        self.field(column).map(|v| v.trim().to_string()).unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A parsed sheet: header order as exported, plus rows in source order.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn is_missing_token(value: &str) -> bool {
    constants::MISSING_TOKENS.contains(&value)
}
