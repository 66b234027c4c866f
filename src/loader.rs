use std::fs;
use std::path::Path;

use log::info;
use serde_json::Value;

use crate::error::LoadError;

/// Read `path` and return the records of its top-level JSON array, in file order.
pub fn load_records(path: &Path) -> Result<Vec<Value>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&raw, path)?;
    info!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

fn parse_records(raw: &str, path: &Path) -> Result<Vec<Value>, LoadError> {
    let data: Value = serde_json::from_str(raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match data {
        Value::Array(arr) => Ok(arr),
        other => Err(LoadError::NotArray {
            path: path.to_path_buf(),
            found: kind_of(&other),
        }),
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
