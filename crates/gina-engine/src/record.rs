use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use gina_core::models::assessment::ClinicalAssessment;
use gina_core::models::observation::ClinicalObservation;

use crate::workup::Workup;

/// An immutable snapshot of a consultation, written at each explicit save.
///
/// Snapshots accumulate per patient and are never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsultationRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    /// Who saved the snapshot, when known.
    #[serde(default)]
    pub clinician: Option<String>,
    pub recorded_at: jiff::Timestamp,
    pub observation: ClinicalObservation,
    pub assessment: ClinicalAssessment,
    pub workup: Workup,
}
