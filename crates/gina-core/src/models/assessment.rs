use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical flags derived from a [`ClinicalObservation`](super::observation::ClinicalObservation).
///
/// Never edited by hand; always recomputed from the observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalAssessment {
    pub difficult_to_treat: bool,
    pub severe_asthma_confirmed: bool,
    pub type2_high: bool,
    pub eligible_for_biologics: bool,
}

impl ClinicalAssessment {
    /// One-line label for headers and audit details.
    pub fn summary(&self) -> &'static str {
        match (self.severe_asthma_confirmed, self.difficult_to_treat) {
            (true, _) if self.eligible_for_biologics => "Severe asthma, eligible for biologics",
            (true, _) => "Severe asthma",
            (false, true) => "Difficult-to-treat asthma",
            (false, false) => "Not difficult-to-treat",
        }
    }
}
