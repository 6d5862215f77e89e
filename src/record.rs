//! Extraction records: ordered field -> value mappings of varying shape.
//!
//! A record's field order is meaningful (it drives column order in tabular
//! output), and the field set may differ between records of the same stream.
//! A small set of reserved field names carries provenance and classification
//! markers rather than artifact content and never reaches tabular output.

use serde_json::{Map, Value};

/// Field names that are always excluded from tabular output.
pub const RESERVED_FIELDS: &[&str] = &[
    "hostname",
    "domain",
    "_generated",
    "_source",
    "_classification",
    "_version",
];

/// Whether a field name belongs to the reserved set.
pub fn is_reserved(field: &str) -> bool {
    RESERVED_FIELDS.contains(&field)
}

/// One extraction record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.fields.push((name.into(), value));
    }

    /// First value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl From<Map<String, Value>> for Record {
    /// JSON object field order is preserved as record field order.
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().collect(),
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
