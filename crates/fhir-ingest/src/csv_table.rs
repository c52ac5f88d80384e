//! CSV loading into column-oriented input.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use fhir_model::{ColumnMap, Value};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Infer the scalar shape of one raw cell.
///
/// Empty cells are null; integer parses win over float parses; `true`/`false`
/// (any case) become booleans; everything else stays text.
fn infer_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(parsed) = raw.parse::<i64>() {
        return Value::Int(parsed);
    }
    if let Ok(parsed) = raw.parse::<f64>() {
        return Value::Float(parsed);
    }
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(raw.to_string())
}

/// Load a CSV file into a column map, one aligned value sequence per header.
///
/// Short rows are padded with nulls so every column keeps the same length;
/// cells past the header width are dropped.
pub fn load_columns(path: &Path) -> Result<ColumnMap> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read csv headers: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
    let mut row_count = 0usize;
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        for (idx, column) in columns.iter_mut().enumerate() {
            let raw = record.get(idx).map_or("", normalize_cell);
            column.push(infer_value(raw));
        }
        row_count += 1;
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = row_count,
        "loaded csv table"
    );

    Ok(headers.into_iter().zip(columns).collect())
}

/// Write a column map back out as CSV, columns in name order.
///
/// Columns are expected to be aligned; a shorter column yields empty cells
/// for its missing rows.
pub fn write_columns(path: &Path, columns: &ColumnMap) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;

    writer
        .write_record(columns.keys())
        .context("write csv header")?;

    let rows = columns.values().map(Vec::len).max().unwrap_or(0);
    for row in 0..rows {
        let record: Vec<String> = columns
            .values()
            .map(|column| column.get(row).map(ToString::to_string).unwrap_or_default())
            .collect();
        writer.write_record(&record).context("write csv row")?;
    }
    writer.flush().context("flush csv")?;
    Ok(())
}
