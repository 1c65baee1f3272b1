use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use gina_core::models::workup::WorkupStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    WorkupTransition,
    ConsultationSaved,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkupTransition => "workup.transition",
            Self::ConsultationSaved => "consultation.save",
        }
    }
}

/// One entry in a patient's clinical audit trail.
///
/// Logged via `tracing`; the subscriber installed by the host application
/// decides where these end up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub patient_id: Uuid,
    /// The acting clinician, when the host application supplied one.
    pub clinician: Option<String>,
    /// Workup status after the action.
    pub status: WorkupStatus,
    pub consultation_id: Option<Uuid>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: AuditAction, patient_id: Uuid, status: WorkupStatus) -> Self {
        Self {
            action,
            patient_id,
            clinician: None,
            status,
            consultation_id: None,
            details: None,
        }
    }

    pub fn by(mut self, clinician: Option<&str>) -> Self {
        self.clinician = clinician.map(str::to_string);
        self
    }

    pub fn for_consultation(mut self, consultation_id: Uuid) -> Self {
        self.consultation_id = Some(consultation_id);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let consultation_id = self
            .consultation_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = self.action.as_str(),
            audit.patient_id = %self.patient_id,
            audit.clinician = self.clinician.as_deref().unwrap_or("unrecorded"),
            audit.status = %self.status,
            audit.consultation_id = %consultation_id,
            audit.details = %details,
            "audit event"
        );
    }
}
