//! File-based rental data repository
//!
//! Stores the cars and reservations envelope in a single pretty-printed JSON
//! file. Field names are matched case-insensitively on read.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use rental_domain::model::DataContainer;
use rental_domain::repository::RentalDataRepository;
use rental_types::{Error, Result, StoreError};

/// File-based implementation of RentalDataRepository
pub struct FileRentalRepository {
    data_path: PathBuf,
}

impl FileRentalRepository {
    pub fn new(data_path: PathBuf) -> Self {
        Self { data_path }
    }

    /// Get the data file path
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    fn read_error(&self, err: impl std::fmt::Display) -> Error {
        StoreError::Read {
            path: self.data_path.clone(),
            message: err.to_string(),
        }
        .into()
    }

    fn parse_error(&self, err: impl std::fmt::Display) -> Error {
        StoreError::Parse {
            path: self.data_path.clone(),
            message: err.to_string(),
        }
        .into()
    }

    fn write_error(&self, err: impl std::fmt::Display) -> Error {
        StoreError::Write {
            path: self.data_path.clone(),
            message: err.to_string(),
        }
        .into()
    }

    fn write_file(&self, data: &DataContainer) -> std::io::Result<()> {
        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.data_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)?;
        writer.flush()
    }
}

impl RentalDataRepository for FileRentalRepository {
    fn load(&self) -> Result<Option<DataContainer>> {
        if !self.data_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.data_path).map_err(|e| self.read_error(e))?;
        let value: Value = serde_json::from_str(&content).map_err(|e| self.parse_error(e))?;
        if value.is_null() {
            return Ok(Some(DataContainer::default()));
        }

        let value = normalize_field_names(value);
        let data = DataContainer::deserialize(value).map_err(|e| self.parse_error(e))?;
        Ok(Some(data))
    }

    fn save(&self, data: &DataContainer) -> Result<()> {
        self.write_file(data).map_err(|e| self.write_error(e))
    }
}

/// Rewrite object keys to their canonical spelling, ignoring case
///
/// Keys that match no known field are left untouched.
pub fn normalize_field_names(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let normalized: Map<String, Value> = map
                .into_iter()
                .map(|(key, v)| (canonical_name(key), normalize_field_names(v)))
                .collect();
            Value::Object(normalized)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(normalize_field_names).collect())
        }
        other => other,
    }
}

fn canonical_name(key: String) -> String {
    DataContainer::known_field_names()
        .find(|name| name.eq_ignore_ascii_case(&key))
        .map(str::to_string)
        .unwrap_or(key)
}
