//! Biologic recommendation scoring.
//!
//! Each drug class implements [`BiologicScorer`]: an eligibility gate, a
//! points sheet and a strength tier. [`score`] runs every registered scorer
//! against the patient's profile and returns the eligible drugs ranked by
//! score. Equal scores keep catalog order. A drug missing from the list did
//! not pass its gate.

pub mod anti_ige;
pub mod anti_il4_il13;
pub mod anti_il5;
pub mod anti_tslp;
pub mod profile;

use gina_core::models::observation::ClinicalObservation;
use gina_core::models::recommendation::{BiologicDrug, BiologicRecommendation, StrengthTier};

pub use profile::BiomarkerProfile;

/// Accumulates points and the reasons behind them.
#[derive(Debug, Default)]
pub struct ScoreSheet {
    points: i32,
    reasons: Vec<String>,
}

impl ScoreSheet {
    pub fn base(points: i32, reason: impl Into<String>) -> Self {
        Self {
            points,
            reasons: vec![reason.into()],
        }
    }

    pub fn add(&mut self, points: i32, reason: impl Into<String>) {
        self.points += points;
        self.reasons.push(reason.into());
    }

    pub fn add_if(&mut self, condition: bool, points: i32, reason: impl Into<String>) {
        if condition {
            self.add(points, reason);
        }
    }

    /// Final score, clamped to 0–100.
    pub fn total(&self) -> u8 {
        self.points.clamp(0, 100) as u8
    }

    pub fn rationale(&self) -> String {
        self.reasons.join("; ")
    }
}

/// Trait implemented by each biologic drug class.
pub trait BiologicScorer: Send + Sync {
    fn drug(&self) -> BiologicDrug;

    /// `Some(text)` describing why the patient qualifies, or `None` if the gate fails.
    fn eligibility(&self, profile: &BiomarkerProfile) -> Option<String>;

    fn score_sheet(&self, profile: &BiomarkerProfile) -> ScoreSheet;

    fn strength(&self, profile: &BiomarkerProfile) -> StrengthTier;

    fn recommend(&self, profile: &BiomarkerProfile) -> Option<BiologicRecommendation> {
        let eligibility = self.eligibility(profile)?;
        let sheet = self.score_sheet(profile);
        let drug = self.drug();
        Some(BiologicRecommendation {
            drug,
            pathway: drug.pathway(),
            score: sheet.total(),
            rationale: sheet.rationale(),
            eligibility,
            strength: self.strength(profile),
        })
    }
}

/// Return all registered scorers in catalog order.
pub fn all_scorers() -> Vec<Box<dyn BiologicScorer>> {
    vec![
        Box::new(anti_ige::AntiIge),
        Box::new(anti_il5::AntiIl5::new(BiologicDrug::Mepolizumab)),
        Box::new(anti_il5::AntiIl5::new(BiologicDrug::Benralizumab)),
        Box::new(anti_il4_il13::AntiIl4Il13),
        Box::new(anti_tslp::AntiTslp),
    ]
}

/// Look up the scorer for a drug.
pub fn get_scorer(drug: BiologicDrug) -> Option<Box<dyn BiologicScorer>> {
    all_scorers().into_iter().find(|s| s.drug() == drug)
}

/// Rank the eligible biologics for an observation, highest score first.
pub fn score(observation: &ClinicalObservation) -> Vec<BiologicRecommendation> {
    let profile = BiomarkerProfile::from_observation(observation);
    let mut ranked: Vec<_> = all_scorers()
        .iter()
        .filter_map(|scorer| scorer.recommend(&profile))
        .collect();
    // `sort_by` is stable, so ties keep catalog order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
