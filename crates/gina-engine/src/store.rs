use uuid::Uuid;

use crate::record::ConsultationRecord;

/// The persistence collaborator for consultation snapshots.
///
/// Appends are all-or-nothing: a record is either fully stored or not at all.
pub trait ConsultationStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn append(&self, record: &ConsultationRecord) -> Result<(), Self::Error>;

    fn load(&self, consultation_id: Uuid) -> Result<ConsultationRecord, Self::Error>;

    /// All snapshots for a patient, oldest first.
    fn list_for_patient(&self, patient_id: Uuid) -> Result<Vec<ConsultationRecord>, Self::Error>;
}
