use std::io::Write;

use serde_json::Value;
use tempfile::NamedTempFile;

/// Write raw text into a fresh temporary file.
pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Write a JSON value into a fresh temporary file.
pub fn write_json(value: &Value) -> NamedTempFile {
    write_temp(&value.to_string())
}
