use gina_core::models::recommendation::{BiologicDrug, StrengthTier};

use super::{BiologicScorer, BiomarkerProfile, ScoreSheet};

/// Anti-IgE (omalizumab): allergic asthma with sensitization and raised total IgE.
pub struct AntiIge;

const MIN_TOTAL_IGE: f64 = 30.0;

impl BiologicScorer for AntiIge {
    fn drug(&self) -> BiologicDrug {
        BiologicDrug::Omalizumab
    }

    fn eligibility(&self, profile: &BiomarkerProfile) -> Option<String> {
        (profile.total_ige >= MIN_TOTAL_IGE && profile.allergen_sensitized).then(|| {
            format!(
                "Total IgE {:.0} IU/mL (≥ 30) with confirmed allergen sensitization",
                profile.total_ige
            )
        })
    }

    fn score_sheet(&self, profile: &BiomarkerProfile) -> ScoreSheet {
        let mut sheet = ScoreSheet::base(50, "Sensitized allergic phenotype");
        sheet.add_if(profile.exacerbations >= 1.0, 15, "Exacerbations in the last year");
        sheet.add_if(profile.childhood_onset, 15, "Childhood-onset asthma");
        sheet.add_if(profile.allergen_driven, 20, "Symptoms driven by allergen exposure");
        // A stronger eosinophilic signal points to the IL-5 and IL-4/13 classes instead.
        sheet.add_if(
            profile.eosinophils >= 300.0 || profile.feno >= 50.0,
            -5,
            "High eosinophils or FeNO favour other classes",
        );
        sheet
    }

    fn strength(&self, _profile: &BiomarkerProfile) -> StrengthTier {
        StrengthTier::Recommended
    }
}
