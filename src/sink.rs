//! CSV sink for extraction records.
//!
//! Records in one stream may disagree on shape, so the writer never
//! negotiates a schema up front: columns are declared from the first
//! record's fields and re-declared with a fresh header row whenever a
//! record's field set differs from the one in force. Reserved fields are
//! always projected out, whatever the shape.

use crate::record;
use crate::target::{ExtractError, RecordStream};
use anyhow::Context;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const TABULAR_EXTENSION: &str = ".csv";

/// Write one record stream to `<dir>/<name>.csv`, returning the row count.
///
/// The stream is drained eagerly; the first failure aborts this file and
/// propagates to the caller.
pub fn write_records(
    dir: &Path,
    name: &str,
    records: RecordStream<'_>,
) -> Result<usize, ExtractError> {
    let path = output_path(dir, name);
    let file = File::create(&path)
        .with_context(|| format!("create output file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    let mut header: Option<Vec<String>> = None;
    let mut rows = 0usize;

    for entry in records {
        let rec = entry?;
        let projected: Vec<(&str, &Value)> = rec
            .iter()
            .filter(|(name, _)| !record::is_reserved(name))
            .collect();

        let fields: Vec<String> = projected.iter().map(|(n, _)| (*n).to_string()).collect();
        if header.as_ref() != Some(&fields) {
            let line = encode_row(projected.iter().map(|(n, _)| *n));
            writeln!(out, "{}", line)
                .with_context(|| format!("write {}", path.display()))?;
            header = Some(fields);
        }

        let line = encode_row(projected.iter().map(|(_, v)| render_value(v)));
        writeln!(out, "{}", line).with_context(|| format!("write {}", path.display()))?;
        rows += 1;
    }

    out.flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(rows)
}

fn output_path(dir: &Path, name: &str) -> PathBuf {
    if name.ends_with(TABULAR_EXTENSION) {
        dir.join(name)
    } else {
        dir.join(format!("{}{}", name, TABULAR_EXTENSION))
    }
}

/// Strings go out raw, null as empty, anything else as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn encode_row<S: AsRef<str>>(fields: impl Iterator<Item = S>) -> String {
    fields
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// RFC 4180 quoting: quote when the field contains the separator, a quote
/// or a line break; double embedded quotes.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
