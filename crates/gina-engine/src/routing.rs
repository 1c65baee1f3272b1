//! Entry routing for the wizard.
//!
//! Some statuses mean "awaiting re-assessment" rather than "starting fresh".
//! Entering the first stage in one of them redirects once: the redirect fires
//! at most once per status value, and an explicit navigation made while a
//! status is current suppresses it for that status.

use gina_core::models::workup::{Stage, WorkupStatus};

/// Where entering the workflow should land for a given status, if not the intake form.
pub fn auto_route(status: WorkupStatus) -> Option<Stage> {
    match status {
        WorkupStatus::Optimizing | WorkupStatus::AddressingFactors => Some(Stage::Review),
        WorkupStatus::ConfirmedSevere => Some(Stage::Monitoring),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryRouter {
    stage: Stage,
    /// The status for which the redirect has already fired or been pre-empted.
    settled_for: Option<WorkupStatus>,
}

impl EntryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Enter the workflow at its first stage, applying the redirect if it is still due.
    pub fn enter(&mut self, status: WorkupStatus) -> Stage {
        self.stage = Stage::Intake;
        if self.settled_for != Some(status) {
            self.settled_for = Some(status);
            if let Some(target) = auto_route(status) {
                tracing::debug!(status = %status, stage = ?target, "auto-routing on entry");
                self.stage = target;
            }
        }
        self.stage
    }

    /// Explicit user navigation. Never overridden for the current status.
    pub fn navigate(&mut self, stage: Stage, status: WorkupStatus) {
        self.stage = stage;
        self.settled_for = Some(status);
    }
}
