//! File I/O utilities for period record files
//!
//! Reads are fail-soft: a missing or unparseable record file yields the
//! default value with a warning, never a fatal error, so one corrupt
//! period cannot take the whole tracker down. Writes go through a temp
//! file and rename so a record is either fully written or untouched.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::FlowError;

/// Read JSON from a record file
///
/// Returns `None` when the file does not exist or does not parse; a parse
/// failure is logged and then treated the same as an absent record.
pub fn read_json_opt<T, P>(path: P) -> Result<Option<T>, FlowError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| FlowError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    match serde_json::from_reader(BufReader::new(file)) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(file = %path.display(), error = %e, "unreadable record treated as empty");
            Ok(None)
        }
    }
}

/// Read JSON from a record file, falling back to the type's default
pub fn read_json_or_default<T, P>(path: P) -> Result<T, FlowError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    Ok(read_json_opt(path)?.unwrap_or_default())
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FlowError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FlowError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| FlowError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| FlowError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FlowError::Storage(format!("Failed to flush data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FlowError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// List the period keys of record files matching `<prefix><key>.json`
///
/// Returns keys in ascending order. A missing directory is an empty list.
pub fn list_record_keys<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<Vec<String>, FlowError> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| FlowError::Storage(format!("Failed to read {}: {}", dir.display(), e)))?;

    let mut keys = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| FlowError::Storage(format!("Failed to read directory entry: {}", e)))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(key) = name
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(".json"))
        {
            keys.push(key.to_string());
        }
    }

    keys.sort();
    Ok(keys)
}

/// Delete all record files whose name starts with `prefix`; returns the count
pub fn remove_matching<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<usize, FlowError> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(0);
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| FlowError::Storage(format!("Failed to read {}: {}", dir.display(), e)))?;

    let mut removed = 0;
    for entry in entries {
        let entry =
            entry.map_err(|e| FlowError::Storage(format!("Failed to read directory entry: {}", e)))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.starts_with(prefix) && name.ends_with(".json") {
            fs::remove_file(entry.path())
                .map_err(|e| FlowError::Storage(format!("Failed to remove {}: {}", name, e)))?;
            removed += 1;
        }
    }

    Ok(removed)
}
