//! gina-storage
//!
//! Local persistence for consultation snapshots. Thin layer over the
//! filesystem: JSON documents, written atomically, never overwritten.

pub mod config;
pub mod error;
pub mod objects;
pub mod store;

pub use crate::config::StoreConfig;
pub use crate::error::StorageError;
pub use crate::store::FileStore;
