//! Decoding of astrology service responses into body records
//!
//! Two response shapes are understood:
//!
//! - planets (birth chart): `{"statusCode": 200, "output": [{"0": {..}, "1": {..}, "debug": {..}}]}`
//! - navamsa (divisional chart): `{"statusCode": 200, "output": {"0": {..}, "1": {..}}}`
//!
//! A bare JSON array of records is accepted for either kind. Individual
//! records are not validated here; that happens in [`crate::chart::record`].

use std::path::Path;

use ariadne::{Color, Label, Report, ReportKind, Source};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::chart::{BodyRecord, ChartKind};

const SUCCESS_STATUS: i64 = 200;

/// Errors that can occur when decoding a response
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("astrology service returned status {code}")]
    Status { code: i64 },

    #[error("response has no usable 'output' field")]
    MissingOutput,

    #[error("expected an object or array of records, found {found}")]
    UnexpectedShape { found: &'static str },
}

impl IngestError {
    /// Format the error, with source context for JSON syntax errors
    pub fn format(&self, source: &str, filename: &str) -> String {
        let IngestError::Json(err) = self else {
            return self.to_string();
        };

        let offset = char_offset(source, byte_offset(source, err.line(), err.column()));
        let span = offset..(offset + 1).min(source.chars().count()).max(offset);
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, offset)
            .with_message("invalid JSON")
            .with_label(
                Label::new((filename, span))
                    .with_message(err.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Byte offset of a 1-based line and column reported by serde_json
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

/// Character index of a byte offset; ariadne spans count characters
fn char_offset(source: &str, byte: usize) -> usize {
    source.char_indices().take_while(|(i, _)| *i < byte).count()
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a response body for the given chart kind
pub fn parse_response(source: &str, kind: ChartKind) -> Result<Vec<BodyRecord>, IngestError> {
    let value: Value = serde_json::from_str(source)?;
    records_from_value(value, kind)
}

/// Read and parse a response saved to a file
pub fn read_response(path: &Path, kind: ChartKind) -> Result<Vec<BodyRecord>, IngestError> {
    let content = std::fs::read_to_string(path)?;
    parse_response(&content, kind)
}

/// Extract body records from a decoded response
pub fn records_from_value(value: Value, kind: ChartKind) -> Result<Vec<BodyRecord>, IngestError> {
    let mut envelope = match value {
        Value::Array(items) => return Ok(collect_records(items)),
        Value::Object(map) => map,
        other => {
            return Err(IngestError::UnexpectedShape {
                found: shape_name(&other),
            })
        }
    };

    if let Some(code) = envelope.get("statusCode").and_then(Value::as_i64) {
        if code != SUCCESS_STATUS {
            return Err(IngestError::Status { code });
        }
    }

    let output = envelope.remove("output").ok_or(IngestError::MissingOutput)?;
    let container = match (kind, output) {
        // planets wraps its record map in a one-element array
        (ChartKind::Birth, Value::Array(mut items)) if !items.is_empty() => items.swap_remove(0),
        (ChartKind::Birth, Value::Array(_)) => return Err(IngestError::MissingOutput),
        (_, other) => other,
    };

    match container {
        Value::Object(map) => Ok(collect_records(ordered_values(map))),
        Value::Array(items) => Ok(collect_records(items)),
        other => Err(IngestError::UnexpectedShape {
            found: shape_name(&other),
        }),
    }
}

/// Values of a record map, integer keys first in numeric order, then the
/// remaining keys in document order; the `debug` entry is skipped
fn ordered_values(map: Map<String, Value>) -> Vec<Value> {
    let mut indexed = Vec::new();
    let mut named = Vec::new();
    for (key, value) in map {
        if key == "debug" {
            continue;
        }
        match array_index(&key) {
            Some(index) => indexed.push((index, value)),
            None => named.push(value),
        }
    }
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, v)| v).chain(named).collect()
}

/// Canonical non-negative integer key, as used for array-like objects
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

fn collect_records(items: Vec<Value>) -> Vec<BodyRecord> {
    items
        .into_iter()
        .filter(|item| item.get("name").map_or(false, |n| !n.is_null()))
        .filter_map(|item| match serde_json::from_value::<BodyRecord>(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(%err, "skipping undecodable record");
                None
            }
        })
        .collect()
}
