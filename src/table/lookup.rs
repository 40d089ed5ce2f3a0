use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, warn};

use super::csv_row::{parse_csv_row, split_csv_lines};
use super::source::DataSource;
use super::text::strip_bom;

/// Builds a `key_column → value_column` map from a CSV file.
///
/// A missing file, a file without data rows, or a header lacking either
/// column yields an empty map. Rows with an empty key or value are skipped
/// and a repeated key keeps the last value.
pub fn build_lookup<S: DataSource + ?Sized>(
    source: &S,
    path: &Path,
    key_column: &str,
    value_column: &str,
) -> Result<HashMap<String, String>> {
    let mut lookup = HashMap::new();

    if !source.exists(path) {
        debug!(path = %path.display(), "lookup csv missing");
        return Ok(lookup);
    }

    let text = source.read_to_string(path)?;
    let lines = split_csv_lines(strip_bom(&text));
    if lines.len() < 2 {
        debug!(path = %path.display(), "lookup csv has no data rows");
        return Ok(lookup);
    }

    let headers = parse_csv_row(lines[0]);
    let (Some(key_index), Some(value_index)) = (
        column_index(&headers, key_column),
        column_index(&headers, value_column),
    ) else {
        warn!(
            path = %path.display(),
            key_column,
            value_column,
            "lookup csv is missing a required column"
        );
        return Ok(lookup);
    };

    for line in &lines[1..] {
        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_csv_row(line);
        let key = fields.get(key_index).map(String::as_str).unwrap_or_default();
        let value = fields
            .get(value_index)
            .map(String::as_str)
            .unwrap_or_default();
        if !key.is_empty() && !value.is_empty() {
            lookup.insert(key.to_string(), value.to_string());
        }
    }

    debug!(path = %path.display(), entries = lookup.len(), "built csv lookup");
    Ok(lookup)
}

fn column_index(headers: &[String], column: &str) -> Option<usize> {
    let wanted = column.to_lowercase();
    headers
        .iter()
        .position(|header| header.to_lowercase() == wanted)
}
