//! Worksheet representation and the mapping between rows and typed
//! records.
//!
//! A sheet is a header row plus data rows of string cells. Column
//! positions are significant: each [`TableRecord`] reads its fields by
//! index, not by header name.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One data row, cells in column order.
pub type Row = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(header: &[&str], rows: Vec<Row>) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

/// A typed record stored as one row of a named worksheet.
pub trait TableRecord: Sized {
    /// Worksheet name.
    const TABLE: &'static str;
    /// Header row, in column order.
    const HEADER: &'static [&'static str];

    /// Build a record from a stored row. The error is a human-readable
    /// reason.
    fn from_row(row: &[String]) -> Result<Self, String>;

    fn to_row(&self) -> Row;
}

/// Indexed access to the cells of one row.
pub(crate) struct Cells<'a> {
    row: &'a [String],
}

impl<'a> Cells<'a> {
    pub(crate) fn new(row: &'a [String]) -> Self {
        Self { row }
    }

    pub(crate) fn text(&self, index: usize, column: &str) -> Result<&'a str, String> {
        self.row
            .get(index)
            .map(|c| c.as_str())
            .ok_or_else(|| format!("missing column {index} ({column})"))
    }

    /// Required, non-blank cell.
    pub(crate) fn required(&self, index: usize, column: &str) -> Result<String, String> {
        let value = self.text(index, column)?.trim();
        if value.is_empty() {
            return Err(format!("empty {column}"));
        }
        Ok(value.to_string())
    }

    /// Blank or missing cells read as `None`.
    pub(crate) fn optional(&self, index: usize) -> Option<String> {
        self.row
            .get(index)
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    }

    pub(crate) fn parse<T: FromStr>(&self, index: usize, column: &str) -> Result<T, String>
    where
        T::Err: std::fmt::Display,
    {
        let raw = self.text(index, column)?.trim();
        raw.parse::<T>()
            .map_err(|e| format!("invalid {column} {raw:?}: {e}"))
    }

    pub(crate) fn datetime(&self, index: usize, column: &str) -> Result<DateTime<Utc>, String> {
        let raw = self.text(index, column)?.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| format!("invalid {column} {raw:?}: {e}"))
    }

    /// Accepts the spellings spreadsheets produce for checkboxes.
    pub(crate) fn flag(&self, index: usize, column: &str) -> Result<bool, String> {
        let raw = self.text(index, column)?.trim();
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "sim" | "yes" => Ok(true),
            "false" | "0" | "nao" | "não" | "no" | "" => Ok(false),
            _ => Err(format!("invalid {column} {raw:?}")),
        }
    }
}

pub(crate) fn opt_cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub(crate) fn datetime_cell(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}
