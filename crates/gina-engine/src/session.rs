//! The active consultation for one patient.
//!
//! A `Session` is an explicit, owned value passed to every operation; there
//! is no ambient patient state. The assessment is re-derived synchronously on
//! every observation change and written only when it actually differs.

use serde_json::{Value, json};
use tracing::{debug, info, warn};
use uuid::Uuid;

use gina_core::models::assessment::ClinicalAssessment;
use gina_core::models::observation::ClinicalObservation;
use gina_core::models::recommendation::BiologicRecommendation;
use gina_core::models::workup::{Stage, WorkupStatus};
use gina_core::patch::merge_patch;

use crate::audit::{AuditAction, AuditEvent};
use crate::biologics;
use crate::classifier::classify;
use crate::error::EngineError;
use crate::record::ConsultationRecord;
use crate::routing::EntryRouter;
use crate::store::ConsultationStore;
use crate::workup::{TransitionOutcome, Workup, WorkupEvent};

#[derive(Debug, Clone)]
pub struct Session {
    patient_id: Uuid,
    clinician: Option<String>,
    observation: ClinicalObservation,
    assessment: ClinicalAssessment,
    workup: Workup,
    router: EntryRouter,
}

impl Session {
    /// Start a new workup for a patient entering the severe asthma pathway.
    pub fn new(patient_id: Uuid) -> Self {
        let observation = ClinicalObservation::default();
        Self {
            patient_id,
            clinician: None,
            assessment: classify(&observation),
            observation,
            workup: Workup::new(),
            router: EntryRouter::new(),
        }
    }

    /// Resume from a stored snapshot. The assessment is re-derived rather than trusted.
    ///
    /// The clinician is not carried over; a follow-up visit sets its own.
    pub fn resume(record: ConsultationRecord) -> Self {
        let assessment = classify(&record.observation);
        if assessment != record.assessment {
            warn!(
                consultation_id = %record.id,
                "stored assessment differs from its observation, using re-derived flags"
            );
        }
        Self {
            patient_id: record.patient_id,
            clinician: None,
            observation: record.observation,
            assessment,
            workup: record.workup,
            router: EntryRouter::new(),
        }
    }

    /// Load a stored consultation and resume it (follow-up visits).
    pub fn load<S: ConsultationStore>(
        store: &S,
        consultation_id: Uuid,
    ) -> Result<Self, EngineError> {
        let record = store
            .load(consultation_id)
            .map_err(|e| EngineError::Persistence(Box::new(e)))?;
        Ok(Self::resume(record))
    }

    pub fn patient_id(&self) -> Uuid {
        self.patient_id
    }

    /// Record who is working this consultation. Carried into audit events and snapshots.
    pub fn set_clinician(&mut self, clinician: impl Into<String>) {
        self.clinician = Some(clinician.into());
    }

    pub fn clinician(&self) -> Option<&str> {
        self.clinician.as_deref()
    }

    pub fn observation(&self) -> &ClinicalObservation {
        &self.observation
    }

    pub fn workup(&self) -> &Workup {
        &self.workup
    }

    pub fn status(&self) -> WorkupStatus {
        self.workup.status()
    }

    /// Apply a JSON merge patch from a form widget.
    ///
    /// A patch that does not fit the observation's types is rejected and
    /// changes nothing. Returns whether the assessment changed.
    pub fn update_observation(&mut self, patch: &Value) -> Result<bool, EngineError> {
        let patched = merge_patch(&self.observation, patch).inspect_err(|e| {
            warn!(patient_id = %self.patient_id, error = %e, "rejected observation patch");
        })?;
        self.observation = patched;
        Ok(self.refresh_assessment())
    }

    /// Typed in-process edit. Returns whether the assessment changed.
    pub fn edit_observation(&mut self, edit: impl FnOnce(&mut ClinicalObservation)) -> bool {
        edit(&mut self.observation);
        self.refresh_assessment()
    }

    fn refresh_assessment(&mut self) -> bool {
        let next = classify(&self.observation);
        if next == self.assessment {
            return false;
        }
        debug!(
            patient_id = %self.patient_id,
            before = self.assessment.summary(),
            after = next.summary(),
            "assessment changed"
        );
        self.assessment = next;
        true
    }

    pub fn assessment(&self) -> &ClinicalAssessment {
        &self.assessment
    }

    /// Ranked biologics for the current observation, computed fresh.
    pub fn recommendations(&self) -> Vec<BiologicRecommendation> {
        biologics::score(&self.observation)
    }

    /// The only way the workup status changes.
    pub fn request_transition(
        &mut self,
        event: WorkupEvent,
    ) -> Result<TransitionOutcome, EngineError> {
        let event_name = event.name();
        let outcome = self.workup.apply(event, &self.observation)?;

        self.router.navigate(outcome.route, outcome.to);

        AuditEvent::new(AuditAction::WorkupTransition, self.patient_id, outcome.to)
            .by(self.clinician())
            .with_details(json!({
                "event": event_name,
                "from": outcome.from,
                "route": outcome.route,
                "assessment": self.assessment.summary(),
            }))
            .emit();

        Ok(outcome)
    }

    /// Enter the workflow at its first stage; may auto-route (see [`crate::routing`]).
    pub fn enter_workflow(&mut self) -> Stage {
        self.router.enter(self.workup.status())
    }

    pub fn navigate(&mut self, stage: Stage) {
        self.router.navigate(stage, self.workup.status());
    }

    pub fn current_stage(&self) -> Stage {
        self.router.stage()
    }

    /// Deep copy of the consultation as it stands, under a fresh consultation id.
    pub fn snapshot(&self) -> ConsultationRecord {
        ConsultationRecord {
            id: Uuid::new_v4(),
            patient_id: self.patient_id,
            clinician: self.clinician.clone(),
            recorded_at: jiff::Timestamp::now(),
            observation: self.observation.clone(),
            assessment: self.assessment,
            workup: self.workup.clone(),
        }
    }

    /// Snapshot and append to the store. A storage failure is returned, never swallowed.
    pub fn save<S: ConsultationStore>(&self, store: &S) -> Result<ConsultationRecord, EngineError> {
        let record = self.snapshot();
        store
            .append(&record)
            .map_err(|e| EngineError::Persistence(Box::new(e)))?;

        info!(
            patient_id = %self.patient_id,
            consultation_id = %record.id,
            status = %record.workup.status(),
            "consultation saved"
        );
        AuditEvent::new(
            AuditAction::ConsultationSaved,
            self.patient_id,
            record.workup.status(),
        )
        .by(self.clinician())
        .for_consultation(record.id)
        .with_details(json!({ "assessment": record.assessment.summary() }))
        .emit();

        Ok(record)
    }
}
