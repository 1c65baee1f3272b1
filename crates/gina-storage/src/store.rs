use std::path::{Path, PathBuf};

use tracing::{info, warn};
use uuid::Uuid;

use gina_core::record_keys;
use gina_engine::{ConsultationRecord, ConsultationStore};

use crate::config::StoreConfig;
use crate::error::StorageError;
use crate::objects;

/// Append-only consultation store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.data_dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The most recent snapshot for a patient, if any.
    pub fn latest_for_patient(
        &self,
        patient_id: Uuid,
    ) -> Result<Option<ConsultationRecord>, StorageError> {
        Ok(self.list_for_patient(patient_id)?.pop())
    }
}

impl ConsultationStore for FileStore {
    type Error = StorageError;

    fn append(&self, record: &ConsultationRecord) -> Result<(), StorageError> {
        let key = record_keys::consultation(record.id);
        objects::put_new_json(&self.root, &key, record)?;
        info!(key = %key, patient_id = %record.patient_id, "consultation written");
        Ok(())
    }

    fn load(&self, consultation_id: Uuid) -> Result<ConsultationRecord, StorageError> {
        objects::get_json(&self.root, &record_keys::consultation(consultation_id))
    }

    fn list_for_patient(&self, patient_id: Uuid) -> Result<Vec<ConsultationRecord>, StorageError> {
        let mut records = Vec::new();
        for key in objects::list_objects(&self.root, record_keys::CONSULTATIONS_PREFIX)? {
            let id = match record_keys::consultation_id(&key) {
                Ok(id) => id,
                Err(e) => {
                    warn!(key = %key, error = %e, "skipping unrecognised file in consultations");
                    continue;
                }
            };
            let record = self.load(id)?;
            if record.patient_id == patient_id {
                records.push(record);
            }
        }
        records.sort_by_key(|r| r.recorded_at);
        Ok(records)
    }
}
