use std::path::Path;

use crate::config::Config;
use crate::error::{EdaError, Result};

use super::model::{WineKind, WineTable};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load both sample tables named by the configuration.
///
/// The tables are read independently; a failure in either aborts the load.
pub fn load_pair(config: &Config) -> Result<(WineTable, WineTable)> {
    let delimiter = config.delimiter_byte();
    let red = load_table(&config.red_path, WineKind::Red, delimiter)?;
    let white = load_table(&config.white_path, WineKind::White, delimiter)?;
    Ok((red, white))
}

/// Read one delimited text file into a [`WineTable`].
///
/// Layout: a header row of column names (optionally quoted), then one row per
/// sample in which every cell is a number.
pub fn load_table(path: &Path, kind: WineKind, delimiter: u8) -> Result<WineTable> {
    if !path.exists() {
        return Err(EdaError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(EdaError::malformed(path, "missing header row"));
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| csv_error(path, source))?;
        if record.len() != headers.len() {
            return Err(EdaError::malformed(
                path,
                format!(
                    "row {}: expected {} fields, found {}",
                    row_no + 1,
                    headers.len(),
                    record.len()
                ),
            ));
        }
        for (col_idx, cell) in record.iter().enumerate() {
            let value = parse_cell(cell).ok_or_else(|| {
                EdaError::malformed(
                    path,
                    format!(
                        "row {}, column '{}': '{cell}' is not a number",
                        row_no + 1,
                        headers[col_idx]
                    ),
                )
            })?;
            values[col_idx].push(value);
        }
    }

    let rows = values.first().map_or(0, Vec::len);
    log::debug!(
        "Loaded {kind}: {rows} rows x {} columns from {}",
        headers.len(),
        path.display()
    );

    WineTable::new(kind, headers, values)
        .ok_or_else(|| EdaError::malformed(path, "columns have differing lengths"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// An empty cell is a missing value and loads as NaN.
fn parse_cell(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(f64::NAN);
    }
    s.parse::<f64>().ok()
}

// The csv crate reports both ragged rows (when `flexible` is off) and I/O
// failures through one error type; ragged rows count as malformed input.
fn csv_error(path: &Path, source: csv::Error) -> EdaError {
    let malformed = matches!(
        source.kind(),
        csv::ErrorKind::UnequalLengths { .. } | csv::ErrorKind::Utf8 { .. }
    );
    if malformed {
        EdaError::malformed(path, source.to_string())
    } else {
        EdaError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}
