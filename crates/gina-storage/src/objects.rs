use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;

use crate::error::StorageError;

fn object_path(root: &Path, key: &str) -> PathBuf {
    key.split('/').fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Read an object's bytes.
pub fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = object_path(root, key);
    fs::read(&path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::io(path, e)
        }
    })
}

/// Write a new object. The bytes land in a temp file first and are moved into
/// place only if nothing exists at `key`, so a reader sees either the whole
/// object or none of it.
pub fn put_new_object(root: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let path = object_path(root, key);
    let dir = path.parent().unwrap_or(root);
    fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StorageError::io(dir, e))?;
    tmp.write_all(body)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| StorageError::io(tmp.path(), e))?;

    tmp.persist_noclobber(&path).map_err(|e| {
        if e.error.kind() == ErrorKind::AlreadyExists {
            StorageError::AlreadyExists {
                key: key.to_string(),
            }
        } else {
            StorageError::io(&path, e.error)
        }
    })?;
    Ok(())
}

/// List the keys directly under `prefix`, sorted. A missing prefix is empty.
pub fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let dir = object_path(root, prefix.trim_end_matches('/'));
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StorageError::io(dir, e)),
    };

    let mut keys = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StorageError::io(&dir, e))?;
        let file_name = entry.file_name();
        if entry.path().is_file()
            && let Some(name) = file_name.to_str()
            && !name.starts_with('.')
        {
            keys.push(format!("{prefix}{name}"));
        }
    }
    keys.sort();
    Ok(keys)
}

/// Load a JSON document.
pub fn get_json<T: DeserializeOwned>(root: &Path, key: &str) -> Result<T, StorageError> {
    let body = get_object(root, key)?;
    Ok(serde_json::from_slice(&body)?)
}

/// Save a new JSON document; fails if one already exists at `key`.
pub fn put_new_json<T: Serialize>(root: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    put_new_object(root, key, &body)
}
