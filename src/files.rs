use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::DataError;

pub const DEFAULT_DELIMITER: u8 = b',';

/// Reads any JSON document from `path`.
pub fn read_structured(path: impl AsRef<Path>) -> Result<Value, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DataError::from_io(path, e))?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            DataError::Io {
                path: path.to_path_buf(),
                source: e.into(),
            }
        } else {
            DataError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })
}

/// Writes `value` to `path` as pretty-printed JSON.
pub fn write_structured(value: &Value, path: impl AsRef<Path>) -> Result<(), DataError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| write_failure(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    writer.flush().map_err(|e| write_failure(path, e))
}

/// Reads every row of a delimited file. No row is treated as a header.
pub fn read_table(path: impl AsRef<Path>, delimiter: u8) -> Result<Vec<Vec<String>>, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DataError::from_io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(file);

    reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(|e| csv_error(path, e))
        })
        .collect()
}

/// Writes `rows` to a delimited file, quoting only where needed.
pub fn write_table(rows: &[Vec<String>], path: impl AsRef<Path>, delimiter: u8) -> Result<(), DataError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| write_failure(path, e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_writer(file);

    for row in rows {
        writer.write_record(row).map_err(|e| write_failure(path, e.into()))?;
    }
    writer.flush().map_err(|e| write_failure(path, e))
}

// Write-side failures are always `Io`, including a missing parent directory.
fn write_failure(path: &Path, source: std::io::Error) -> DataError {
    DataError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_error(path: &Path, err: csv::Error) -> DataError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DataError::from_io(path, source),
        csv::ErrorKind::Utf8 { err, .. } => DataError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, err),
        },
        other => DataError::Parse {
            path: path.to_path_buf(),
            message: format!("{other:?}"),
        },
    }
}
