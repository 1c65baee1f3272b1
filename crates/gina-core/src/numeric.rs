//! Numeric form entries.
//!
//! Form widgets hand over whatever the clinician typed. Numeric fields keep
//! that raw text and normalize on read: empty or unparsable text reads as
//! `0.0`. This lenience is deliberate and is the only place it happens.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Parse a form entry, treating empty, unparsable, or non-finite text as zero.
pub fn parse_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Raw text of a numeric form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct NumericEntry(String);

impl NumericEntry {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The normalized value (see [`parse_or_zero`]).
    pub fn value(&self) -> f64 {
        parse_or_zero(&self.0)
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// True when the field holds something other than whitespace.
    pub fn is_entered(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl From<&str> for NumericEntry {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for NumericEntry {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<f64> for NumericEntry {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for NumericEntry {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NumericEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Number inputs in the browser may post either a string or a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Number(f64),
}

impl<'de> Deserialize<'de> for NumericEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawEntry::deserialize(deserializer)? {
            RawEntry::Text(text) => Self(text),
            RawEntry::Number(number) => Self::from(number),
        })
    }
}
