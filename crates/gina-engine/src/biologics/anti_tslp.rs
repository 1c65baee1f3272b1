use gina_core::models::recommendation::{BiologicDrug, StrengthTier};

use super::{BiologicScorer, BiomarkerProfile, ScoreSheet};

/// Anti-TSLP (tezepelumab). The only class effective without a Type 2 signal.
pub struct AntiTslp;

impl BiologicScorer for AntiTslp {
    fn drug(&self) -> BiologicDrug {
        BiologicDrug::Tezepelumab
    }

    fn eligibility(&self, profile: &BiomarkerProfile) -> Option<String> {
        match (profile.exacerbations >= 1.0, profile.maintenance_ocs) {
            (false, false) => None,
            (true, false) => Some(format!(
                "{:.0} exacerbation(s) in the last year",
                profile.exacerbations
            )),
            (false, true) => Some("On maintenance OCS".to_string()),
            (true, true) => Some(format!(
                "{:.0} exacerbation(s) in the last year on maintenance OCS",
                profile.exacerbations
            )),
        }
    }

    fn score_sheet(&self, profile: &BiomarkerProfile) -> ScoreSheet {
        let mut sheet = ScoreSheet::base(55, "Broad upstream blockade");
        if profile.low_type2() {
            sheet.add(30, "Low eosinophils and FeNO: effective without Type 2 signal");
        } else {
            sheet.add_if(profile.exacerbations >= 2.0, 10, "Two or more exacerbations in the last year");
            sheet.add_if(profile.feno >= 25.0, 5, "FeNO ≥ 25 ppb");
        }
        sheet
    }

    fn strength(&self, profile: &BiomarkerProfile) -> StrengthTier {
        if profile.low_type2() {
            StrengthTier::PrioritizedNonType2
        } else {
            StrengthTier::Recommended
        }
    }
}
