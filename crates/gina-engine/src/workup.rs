//! Severe asthma workup state machine.
//!
//! Status changes in exactly one place, [`Workup::apply`]. Each event is first
//! checked against the transition table for the current status, then against
//! its prerequisites, and only then is history written. A rejected event
//! leaves the workup exactly as it was.
//!
//! Lifecycle:
//!
//! ```text
//! screening ─SaveOptimizationPlan─▶ optimizing ─RecordReviewAnswers─┬▶ confirmed_severe
//!                                                                   └▶ controlled_on_optimization
//! confirmed_severe ─AddressContributoryFactors─▶ addressing_factors ─RecordReviewAnswers─┬▶ confirmed_severe
//!                                                                                        └▶ rejected_severe
//! confirmed_severe ─SelectTherapy─▶ biologic_trial ─RecordTrialOutcome─┬▶ confirmed_severe (good)
//!                                                                      ├▶ biologic_trial (partial, stop)
//!                                                                      ├▶ screening (first failure, switch)
//!                                                                      └▶ biologic_failure (second failure)
//! screening (after switch) ─SelectTherapy─▶ biologic_trial
//! biologic_trial (after stop) ─SelectTherapy─▶ biologic_trial
//! ```
//!
//! A trial that ended in no response is closed: its outcome is never
//! re-recorded, and the failed drug is not offered again.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

use gina_core::models::observation::ClinicalObservation;
use gina_core::models::recommendation::BiologicDrug;
use gina_core::models::workup::{
    ControlQuestionnaire, FailureChoice, OptimizationPlan, ReviewRecord, Stage, TrialAttempt,
    TrialResponse, WorkupStatus,
};

use crate::biologics;
use crate::classifier::classify;
use crate::error::EngineError;
use crate::guidance;

/// A clinician decision submitted to the workup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum WorkupEvent {
    SaveOptimizationPlan {
        plan: OptimizationPlan,
    },
    RecordReviewAnswers {
        reviewed_on: Date,
        answers: ControlQuestionnaire,
    },
    /// Treat comorbidities and mimics before confirming biologic eligibility.
    AddressContributoryFactors {
        plan: OptimizationPlan,
    },
    SelectTherapy {
        drug: BiologicDrug,
        start_date: Date,
    },
    RecordTrialOutcome {
        evaluated_on: Date,
        response: TrialResponse,
        /// Required on a first failure, ignored otherwise.
        choice: Option<FailureChoice>,
    },
}

impl WorkupEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SaveOptimizationPlan { .. } => "SaveOptimizationPlan",
            Self::RecordReviewAnswers { .. } => "RecordReviewAnswers",
            Self::AddressContributoryFactors { .. } => "AddressContributoryFactors",
            Self::SelectTherapy { .. } => "SelectTherapy",
            Self::RecordTrialOutcome { .. } => "RecordTrialOutcome",
        }
    }
}

/// The result of an accepted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransitionOutcome {
    pub from: WorkupStatus,
    pub to: WorkupStatus,
    pub rationale: Option<String>,
    pub guidance: Vec<String>,
    /// The stage the wizard should show next.
    pub route: Stage,
}

/// The lifecycle half of a patient's record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Workup {
    status: WorkupStatus,
    #[serde(flatten)]
    history: WorkupHistory,
}

/// Everything the workup accumulates besides its status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct WorkupHistory {
    optimization_history: Vec<OptimizationPlan>,
    trials: Vec<TrialAttempt>,
    selected_biologic: Option<BiologicDrug>,
    biologic_response: Option<TrialResponse>,
    last_review: Option<ReviewRecord>,
}

/// What a history method decided, before the status is written.
struct Step {
    to: WorkupStatus,
    rationale: Option<String>,
    guidance: Vec<String>,
    route: Stage,
}

impl Workup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> WorkupStatus {
        self.status
    }

    pub fn optimization_history(&self) -> &[OptimizationPlan] {
        &self.history.optimization_history
    }

    pub fn trials(&self) -> &[TrialAttempt] {
        &self.history.trials
    }

    pub fn failed_trials(&self) -> usize {
        self.history.trials.iter().filter(|t| t.failed()).count()
    }

    pub fn selected_biologic(&self) -> Option<BiologicDrug> {
        self.history.selected_biologic
    }

    pub fn biologic_response(&self) -> Option<TrialResponse> {
        self.history.biologic_response
    }

    pub fn last_review(&self) -> Option<&ReviewRecord> {
        self.history.last_review.as_ref()
    }

    /// The transition table: which events the current status accepts.
    pub fn permits(&self, event: &WorkupEvent) -> bool {
        use WorkupStatus::*;

        match event {
            WorkupEvent::SaveOptimizationPlan { .. } => self.status == Screening,
            WorkupEvent::RecordReviewAnswers { .. } => matches!(
                self.status,
                Optimizing | AddressingFactors | ControlledOnOptimization
            ),
            WorkupEvent::AddressContributoryFactors { .. } => self.status == ConfirmedSevere,
            WorkupEvent::SelectTherapy { .. } => match self.status {
                ConfirmedSevere => true,
                Screening => self.history.last_decision() == Some(FailureChoice::Switch),
                BiologicTrial => {
                    self.history.last_decision() == Some(FailureChoice::StopAndReassess)
                }
                _ => false,
            },
            WorkupEvent::RecordTrialOutcome { .. } => {
                self.status == BiologicTrial && !self.history.current_trial_closed()
            }
        }
    }

    /// Apply a clinician event. The only code path that writes `status`.
    pub fn apply(
        &mut self,
        event: WorkupEvent,
        observation: &ClinicalObservation,
    ) -> Result<TransitionOutcome, EngineError> {
        let from = self.status;
        let name = event.name();

        if !self.permits(&event) {
            warn!(status = %from, event = name, "rejected workup event");
            return Err(EngineError::InvalidTransition {
                status: from,
                event: name,
            });
        }

        let step = match event {
            WorkupEvent::SaveOptimizationPlan { plan } => {
                self.history.save_optimization_plan(plan, observation)?
            }
            WorkupEvent::RecordReviewAnswers {
                reviewed_on,
                answers,
            } => self.history.record_review(from, reviewed_on, answers)?,
            WorkupEvent::AddressContributoryFactors { plan } => {
                self.history.address_factors(plan)?
            }
            WorkupEvent::SelectTherapy { drug, start_date } => {
                self.history.select_therapy(drug, start_date, observation)?
            }
            WorkupEvent::RecordTrialOutcome {
                evaluated_on,
                response,
                choice,
            } => self
                .history
                .record_trial_outcome(from, evaluated_on, response, choice)?,
        };

        self.status = step.to;
        info!(from = %from, to = %step.to, event = name, "workup transition");

        Ok(TransitionOutcome {
            from,
            to: step.to,
            rationale: step.rationale,
            guidance: step.guidance,
            route: step.route,
        })
    }
}

impl WorkupHistory {
    fn last_decision(&self) -> Option<FailureChoice> {
        self.trials.last().and_then(|t| t.decision)
    }

    fn current_trial_closed(&self) -> bool {
        self.trials.last().is_some_and(TrialAttempt::failed)
    }

    fn save_optimization_plan(
        &mut self,
        plan: OptimizationPlan,
        observation: &ClinicalObservation,
    ) -> Result<Step, EngineError> {
        if !observation.basic_info.age.is_entered() {
            return Err(EngineError::missing("basic patient data (age)", Stage::Intake));
        }
        if plan.is_empty() {
            return Err(EngineError::missing(
                "at least one optimization intervention or a comorbidity plan",
                Stage::Optimize,
            ));
        }

        let mut guidance = vec![
            "Check inhaler technique and adherence, treat comorbidities and modifiable risk factors."
                .to_string(),
        ];
        if let Some(follow_up) = plan.follow_up_date {
            guidance.push(format!("Review asthma control at follow-up on {follow_up}."));
        }
        self.optimization_history.push(plan);

        Ok(Step {
            to: WorkupStatus::Optimizing,
            rationale: None,
            guidance,
            route: Stage::Review,
        })
    }

    fn record_review(
        &mut self,
        from: WorkupStatus,
        reviewed_on: Date,
        answers: ControlQuestionnaire,
    ) -> Result<Step, EngineError> {
        if self.optimization_history.is_empty() {
            return Err(EngineError::missing("an optimization plan", Stage::Optimize));
        }

        let controlled = answers.is_controlled();
        let (to, rationale, route) = match (controlled, from) {
            (false, WorkupStatus::ControlledOnOptimization) => (
                WorkupStatus::ConfirmedSevere,
                guidance::STEP_DOWN_RATIONALE,
                Stage::Specialist,
            ),
            (false, _) => (
                WorkupStatus::ConfirmedSevere,
                guidance::SEVERE_RATIONALE,
                Stage::Specialist,
            ),
            (true, WorkupStatus::AddressingFactors) => (
                WorkupStatus::RejectedSevere,
                guidance::NOT_SEVERE_RATIONALE,
                Stage::Monitoring,
            ),
            (true, _) => (
                WorkupStatus::ControlledOnOptimization,
                guidance::CONTROLLED_RATIONALE,
                Stage::Monitoring,
            ),
        };

        let next_review = (to == WorkupStatus::ControlledOnOptimization)
            .then(|| guidance::re_review_date(reviewed_on));
        let guidance = match next_review {
            Some(date) => vec![format!(
                "Re-review in {} months, on {date}.",
                guidance::RE_REVIEW_MONTHS
            )],
            None => Vec::new(),
        };

        self.last_review = Some(ReviewRecord {
            reviewed_on,
            answers,
            controlled,
            rationale: rationale.to_string(),
            next_review,
        });

        Ok(Step {
            to,
            rationale: Some(rationale.to_string()),
            guidance,
            route,
        })
    }

    fn address_factors(&mut self, plan: OptimizationPlan) -> Result<Step, EngineError> {
        if plan.is_empty() {
            return Err(EngineError::missing(
                "the comorbidities or mimics to be treated",
                Stage::Specialist,
            ));
        }
        self.optimization_history.push(plan);

        Ok(Step {
            to: WorkupStatus::AddressingFactors,
            rationale: None,
            guidance: vec![
                "Treat comorbidities and exclude mimics, then review asthma control again."
                    .to_string(),
            ],
            route: Stage::Review,
        })
    }

    fn select_therapy(
        &mut self,
        drug: BiologicDrug,
        start_date: Date,
        observation: &ClinicalObservation,
    ) -> Result<Step, EngineError> {
        if observation.medications.biologics_available == Some(false) {
            return Err(EngineError::missing(
                "access to biologic therapy",
                Stage::Phenotype,
            ));
        }
        let assessment = classify(observation);
        if !assessment.severe_asthma_confirmed {
            return Err(EngineError::missing(
                "confirmed severe asthma (adherence, inhaler technique, uncontrolled on ICS-LABA)",
                Stage::Intake,
            ));
        }
        if !assessment.eligible_for_biologics {
            return Err(EngineError::missing(
                "confirmed biologic eligibility (Type 2 or OCS-dependent phenotype with exacerbations)",
                Stage::Phenotype,
            ));
        }
        if self.trials.iter().any(|t| t.drug == drug && t.failed()) {
            return Err(EngineError::TherapyAlreadyFailed { drug });
        }
        if !biologics::score(observation).iter().any(|r| r.drug == drug) {
            return Err(EngineError::TherapyNotRecommended { drug });
        }

        self.trials.push(TrialAttempt {
            drug,
            start_date,
            outcome: None,
            evaluated_on: None,
            decision: None,
        });
        self.selected_biologic = Some(drug);
        self.biologic_response = None;

        Ok(Step {
            to: WorkupStatus::BiologicTrial,
            rationale: None,
            guidance: vec![guidance::trial_started(drug, start_date)],
            route: Stage::BiologicTrial,
        })
    }

    fn record_trial_outcome(
        &mut self,
        from: WorkupStatus,
        evaluated_on: Date,
        response: TrialResponse,
        choice: Option<FailureChoice>,
    ) -> Result<Step, EngineError> {
        let Some((current, earlier)) = self.trials.split_last_mut() else {
            return Err(EngineError::missing("an initiated biologic trial", Stage::Phenotype));
        };
        let prior_failures = earlier.iter().filter(|t| t.failed()).count();
        let early = guidance::early_evaluation(current.start_date, evaluated_on);

        let (to, text, route, decision) = match response {
            TrialResponse::Good => (
                WorkupStatus::ConfirmedSevere,
                guidance::GOOD_RESPONSE.to_string(),
                Stage::Monitoring,
                None,
            ),
            TrialResponse::Partial => (
                from,
                guidance::partial_response(),
                Stage::BiologicTrial,
                None,
            ),
            TrialResponse::NoResponse if prior_failures >= 1 => (
                WorkupStatus::BiologicFailure,
                guidance::BIOLOGIC_FAILURE.to_string(),
                Stage::Monitoring,
                None,
            ),
            TrialResponse::NoResponse => match choice {
                None => {
                    return Err(EngineError::missing(
                        "a switch or stop decision after the first biologic failure",
                        Stage::Evaluation,
                    ));
                }
                Some(FailureChoice::Switch) => (
                    WorkupStatus::Screening,
                    guidance::SWITCH_BIOLOGIC.to_string(),
                    Stage::Phenotype,
                    Some(FailureChoice::Switch),
                ),
                Some(FailureChoice::StopAndReassess) => (
                    from,
                    guidance::STOP_AND_REASSESS.to_string(),
                    Stage::Monitoring,
                    Some(FailureChoice::StopAndReassess),
                ),
            },
        };

        current.outcome = Some(response);
        current.evaluated_on = Some(evaluated_on);
        current.decision = decision;

        if decision == Some(FailureChoice::Switch) {
            self.selected_biologic = None;
            self.biologic_response = None;
        } else {
            self.biologic_response = Some(response);
        }

        let mut guidance = vec![text];
        guidance.extend(early);

        Ok(Step {
            to,
            rationale: None,
            guidance,
            route,
        })
    }
}
