//! Store configuration.
//!
//! A small versioned JSON file. Older files are migrated in place on load,
//! before deserializing, and saves always stamp the current version.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::StorageError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "gina-severe";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Root of the consultation store.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: data_dir.into(),
        }
    }
}

/// `<platform config dir>/gina-severe/config.json`.
pub fn default_config_path() -> Result<PathBuf, StorageError> {
    let base = dirs::config_dir()
        .ok_or_else(|| StorageError::Config("no config directory found".to_string()))?;
    Ok(base.join(APP_DIR).join(gina_core::record_keys::STORE_CONFIG))
}

/// `<platform data dir>/gina-severe`.
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir()
        .ok_or_else(|| StorageError::Config("no data directory found".to_string()))?;
    Ok(base.join(APP_DIR))
}

pub fn load_config(path: &Path) -> Result<StoreConfig, StorageError> {
    let contents = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Load the config at `path`, creating it with `data_dir` if it does not exist yet.
pub fn load_or_init(path: &Path, data_dir: impl Into<PathBuf>) -> Result<StoreConfig, StorageError> {
    if path.exists() {
        return load_config(path);
    }
    let config = StoreConfig::new(data_dir);
    save_config(path, &config)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, StorageError> {
    if from_version > CURRENT_VERSION {
        return Err(StorageError::Config(format!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        )));
    }

    // v0 → v1: same shape, only the version stamp was missing
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| StorageError::Config("config is not a JSON object".to_string()))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("stamped unversioned store config as v1");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &StoreConfig) -> Result<(), StorageError> {
    let dir = path
        .parent()
        .ok_or_else(|| StorageError::Config(format!("{} has no parent directory", path.display())))?;
    fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file in the same directory, then rename over the old config
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StorageError::io(dir, e))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| StorageError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| StorageError::io(path, e.error))?;

    tracing::info!(path = %path.display(), "store config saved");
    Ok(())
}
