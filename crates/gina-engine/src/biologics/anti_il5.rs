use gina_core::models::recommendation::{BiologicDrug, StrengthTier};

use super::{BiologicScorer, BiomarkerProfile, ScoreSheet};

/// Anti-IL-5/5R class. Mepolizumab and benralizumab are scored identically.
pub struct AntiIl5 {
    drug: BiologicDrug,
}

impl AntiIl5 {
    pub fn new(drug: BiologicDrug) -> Self {
        Self { drug }
    }
}

impl BiologicScorer for AntiIl5 {
    fn drug(&self) -> BiologicDrug {
        self.drug
    }

    fn eligibility(&self, profile: &BiomarkerProfile) -> Option<String> {
        (profile.eosinophils >= 150.0).then(|| {
            format!(
                "Blood eosinophils {:.0} cells/µL (≥ 150)",
                profile.eosinophils
            )
        })
    }

    fn score_sheet(&self, profile: &BiomarkerProfile) -> ScoreSheet {
        let mut sheet = ScoreSheet::base(60, "Eosinophilic phenotype");
        sheet.add_if(profile.eosinophils >= 300.0, 25, "Eosinophils ≥ 300 cells/µL");
        sheet.add_if(profile.exacerbations >= 2.0, 10, "Two or more exacerbations in the last year");
        sheet.add_if(profile.nasal_polyps, 15, "Nasal polyps");
        sheet.add_if(profile.maintenance_ocs, 10, "Reduces maintenance OCS");
        sheet.add_if(profile.adult_onset, 5, "Adult-onset asthma");
        sheet
    }

    fn strength(&self, profile: &BiomarkerProfile) -> StrengthTier {
        if profile.eosinophils >= 300.0 {
            StrengthTier::Prioritized
        } else {
            StrengthTier::Recommended
        }
    }
}
