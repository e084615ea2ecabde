// Reading name lists from disk

use std::fs;
use std::path::Path;
use log::{info, warn};

use crate::error::{Error, Result};
use crate::types::NameValue;

/// One name per line. Invalid UTF-8 is replaced rather than rejected and
/// blank lines become missing values.
pub fn read_name_lines<P: AsRef<Path>>(path: P) -> Result<Vec<NameValue>> {
    let bytes = fs::read(&path)?;
    let text = String::from_utf8_lossy(&bytes);
    let names: Vec<NameValue> = text
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                NameValue::Missing
            } else {
                NameValue::Text(line.to_string())
            }
        })
        .collect();
    info!("Read {} lines from {:?}", names.len(), path.as_ref());
    Ok(names)
}

/// The values of one column of a CSV file with a header row. Empty cells
/// become missing values.
pub fn read_csv_column<P: AsRef<Path>>(path: P, column: &str) -> Result<Vec<NameValue>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&path)?;

    let headers = reader.headers()?.clone();
    let column_idx = headers
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| Error::config(format!("Column '{}' not found in {:?}", column, path.as_ref())))?;

    let mut names = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        let record = record?;
        match record.get(column_idx) {
            Some(cell) => {
                let cell = String::from_utf8_lossy(cell);
                if cell.trim().is_empty() {
                    names.push(NameValue::Missing);
                } else {
                    names.push(NameValue::Text(cell.into_owned()));
                }
            },
            None => {
                warn!("Row {} has no column '{}'", row_idx + 2, column);
                names.push(NameValue::Missing);
            }
        }
    }

    info!("Read {} values of column '{}' from {:?}", names.len(), column, path.as_ref());
    Ok(names)
}
