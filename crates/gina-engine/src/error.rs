use thiserror::Error;

use gina_core::error::CoreError;
use gina_core::models::recommendation::BiologicDrug;
use gina_core::models::workup::{Stage, WorkupStatus};

#[derive(Debug, Error)]
pub enum EngineError {
    /// Recoverable: the UI should send the clinician back to `return_to`.
    #[error("missing prerequisite: {missing} (return to stage {return_to})")]
    MissingPrerequisite { missing: String, return_to: Stage },

    /// A contract violation by the caller. Status is never changed.
    #[error("{event} is not a valid event while the workup is {status}")]
    InvalidTransition {
        status: WorkupStatus,
        event: &'static str,
    },

    #[error("{drug} is not among the current recommendations for this patient")]
    TherapyNotRecommended { drug: BiologicDrug },

    #[error("{drug} has already failed a trial for this patient")]
    TherapyAlreadyFailed { drug: BiologicDrug },

    #[error("observation patch rejected: {0}")]
    PatchRejected(#[from] CoreError),

    #[error("persistence failed: {0}")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EngineError {
    pub(crate) fn missing(missing: impl Into<String>, return_to: Stage) -> Self {
        Self::MissingPrerequisite {
            missing: missing.into(),
            return_to,
        }
    }

    /// True for errors the clinician can resolve from the UI.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingPrerequisite { .. }
                | Self::TherapyNotRecommended { .. }
                | Self::TherapyAlreadyFailed { .. }
                | Self::PatchRejected(_)
        )
    }
}
