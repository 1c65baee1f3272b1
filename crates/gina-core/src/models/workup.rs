use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::recommendation::BiologicDrug;

/// Lifecycle status of a severe asthma workup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WorkupStatus {
    #[default]
    Screening,
    Optimizing,
    ControlledOnOptimization,
    AddressingFactors,
    ConfirmedSevere,
    BiologicTrial,
    BiologicFailure,
    /// Control returned once a contributory factor was treated: difficult-to-treat, not severe.
    RejectedSevere,
}

impl WorkupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Screening => "screening",
            Self::Optimizing => "optimizing",
            Self::ControlledOnOptimization => "controlled_on_optimization",
            Self::AddressingFactors => "addressing_factors",
            Self::ConfirmedSevere => "confirmed_severe",
            Self::BiologicTrial => "biologic_trial",
            Self::BiologicFailure => "biologic_failure",
            Self::RejectedSevere => "rejected_severe",
        }
    }

    /// No clinician event is accepted once the workup reaches one of these.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::BiologicFailure | Self::RejectedSevere)
    }
}

impl fmt::Display for WorkupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screens of the wizard, in workflow order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Stage {
    #[default]
    Intake,
    Optimize,
    Review,
    Specialist,
    Phenotype,
    BiologicTrial,
    Evaluation,
    Monitoring,
}

impl Stage {
    /// 1-based position, used for "return to stage N" prompts.
    pub fn number(&self) -> u8 {
        match self {
            Self::Intake => 1,
            Self::Optimize => 2,
            Self::Review => 3,
            Self::Specialist => 4,
            Self::Phenotype => 5,
            Self::BiologicTrial => 6,
            Self::Evaluation => 7,
            Self::Monitoring => 8,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Intake => "Assessment",
            Self::Optimize => "Optimize management",
            Self::Review => "Review response",
            Self::Specialist => "Specialist assessment",
            Self::Phenotype => "Phenotype and biologic selection",
            Self::BiologicTrial => "Biologic trial",
            Self::Evaluation => "Evaluate response",
            Self::Monitoring => "Monitoring",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// An entry in the append-only optimization history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptimizationPlan {
    pub start_date: jiff::civil::Date,
    pub interventions: Vec<Intervention>,
    pub follow_up_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub comorbidity_plan: String,
}

impl OptimizationPlan {
    pub fn is_empty(&self) -> bool {
        self.interventions.is_empty() && self.comorbidity_plan.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Intervention {
    InhalerTechniqueTraining,
    AdherenceSupport,
    TreatComorbidities,
    SmokingCessation,
    AllergenAvoidance,
    SwitchToMart,
    AddLama,
    AddLtra,
    AddAzithromycin,
    PulmonaryRehabilitation,
    Other(String),
}

/// The four-item control questionnaire asked at review. Any "yes" means uncontrolled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ControlQuestionnaire {
    /// Daytime symptoms more than twice a week.
    pub daytime_symptoms: bool,
    pub night_waking: bool,
    /// Reliever needed more than twice a week.
    pub reliever_use: bool,
    pub activity_limitation: bool,
}

impl ControlQuestionnaire {
    pub fn positive_answers(&self) -> usize {
        [
            self.daytime_symptoms,
            self.night_waking,
            self.reliever_use,
            self.activity_limitation,
        ]
        .into_iter()
        .filter(|answer| *answer)
        .count()
    }

    pub fn is_controlled(&self) -> bool {
        self.positive_answers() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReviewRecord {
    pub reviewed_on: jiff::civil::Date,
    pub answers: ControlQuestionnaire,
    pub controlled: bool,
    pub rationale: String,
    pub next_review: Option<jiff::civil::Date>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrialResponse {
    Good,
    Partial,
    NoResponse,
}

/// What the clinician decides after a first biologic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FailureChoice {
    Switch,
    StopAndReassess,
}

/// One biologic trial, from selection to evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrialAttempt {
    pub drug: BiologicDrug,
    pub start_date: jiff::civil::Date,
    pub outcome: Option<TrialResponse>,
    pub evaluated_on: Option<jiff::civil::Date>,
    pub decision: Option<FailureChoice>,
}

impl TrialAttempt {
    pub fn failed(&self) -> bool {
        self.outcome == Some(TrialResponse::NoResponse)
    }
}
