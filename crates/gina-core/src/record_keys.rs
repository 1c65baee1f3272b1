//! Record key/path conventions.
//!
//! Pure string functions. These define the canonical layout of persisted
//! documents relative to a store's root.

use uuid::Uuid;

use crate::error::CoreError;

pub const CONSULTATIONS_PREFIX: &str = "consultations/";

pub fn consultation(id: Uuid) -> String {
    format!("consultations/{id}.json")
}

/// Recover the consultation id from a key produced by [`consultation`].
pub fn consultation_id(key: &str) -> Result<Uuid, CoreError> {
    let stem = key
        .strip_prefix(CONSULTATIONS_PREFIX)
        .unwrap_or(key)
        .trim_end_matches(".json");
    Ok(Uuid::parse_str(stem)?)
}

pub const STORE_CONFIG: &str = "config.json";
