// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Workbook assembly
//!
//! Exports are built as plain sheet/row/cell data: a "data" sheet with one
//! row per extracted record and a "summary" sheet with the aggregated
//! totals. Rendering stops at CSV per sheet and JSON for the whole
//! workbook — binding to an actual spreadsheet file format happens on the
//! UI side, outside this workspace.

use precast_core::fasteners::{aggregate_sorted, BoltRecord};
use serde::{Deserialize, Serialize};

/// A single cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Number(f64),
    Empty,
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        Cell::Integer(n as i64)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl Cell {
    /// Render for CSV output; text is quoted only when it needs to be
    fn to_csv_field(&self) -> String {
        match self {
            Cell::Text(s) => {
                if s.contains([',', '"', '\n']) {
                    format!("\"{}\"", s.replace('"', "\"\""))
                } else {
                    s.clone()
                }
            }
            Cell::Number(f) => format!("{f}"),
            Cell::Integer(i) => format!("{i}"),
            Cell::Empty => String::new(),
        }
    }
}

/// One named sheet: a header row plus data rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, header: &[&str]) -> Self {
        Self {
            name: name.into(),
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Render the sheet as CSV, header first
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header.join(","));
        out.push('\n');
        for row in &self.rows {
            let fields: Vec<String> = row.iter().map(Cell::to_csv_field).collect();
            out.push_str(&fields.join(","));
            out.push('\n');
        }
        out
    }
}

/// An ordered collection of sheets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Serialize the whole workbook as a JSON blob for download/clipboard
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

/// One data-sheet row: a fastener record tagged with its assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastenerRow {
    pub assembly: String,
    pub record: BoltRecord,
}

const FASTENER_DATA_HEADER: &[&str] = &[
    "Assembly", "Name", "Standard", "Size", "Length", "Bolts", "Nuts", "Washers",
];
const FASTENER_SUMMARY_HEADER: &[&str] =
    &["Name", "Standard", "Size", "Length", "Bolts", "Nuts", "Washers"];

/// Build the fastener export: a "data" sheet with every extracted record and
/// a "summary" sheet aggregated across all assemblies.
pub fn fastener_workbook(rows: &[FastenerRow]) -> Workbook {
    let mut data = Sheet::new("data", FASTENER_DATA_HEADER);
    for row in rows {
        data.push_row(vec![
            row.assembly.as_str().into(),
            row.record.name.as_str().into(),
            row.record.standard.as_str().into(),
            row.record.size.as_str().into(),
            row.record.length.as_str().into(),
            row.record.bolt_count.into(),
            row.record.nut_count.into(),
            row.record.washer_count.into(),
        ]);
    }

    let totals = aggregate_sorted(rows.iter().map(|r| r.record.clone()));
    let mut summary = Sheet::new("summary", FASTENER_SUMMARY_HEADER);
    for record in &totals {
        summary.push_row(vec![
            record.name.as_str().into(),
            record.standard.as_str().into(),
            record.size.as_str().into(),
            record.length.as_str().into(),
            record.bolt_count.into(),
            record.nut_count.into(),
            record.washer_count.into(),
        ]);
    }

    tracing::debug!(
        data_rows = rows.len(),
        summary_rows = totals.len(),
        "built fastener workbook"
    );

    Workbook {
        sheets: vec![data, summary],
    }
}
