//! gina-core
//!
//! Pure domain types for the severe asthma workup, numeric form-entry
//! normalization, JSON merge patching and record key conventions.
//! No engine logic lives here — this is the shared vocabulary of the system.

pub mod error;
pub mod models;
pub mod numeric;
pub mod patch;
pub mod record_keys;
