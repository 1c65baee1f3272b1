use gina_core::models::recommendation::{BiologicDrug, StrengthTier};

use super::{BiologicScorer, BiomarkerProfile, ScoreSheet};

/// Anti-IL-4Rα (dupilumab): blocks IL-4 and IL-13 signalling.
pub struct AntiIl4Il13;

/// Above this eosinophil count the class carries a hypereosinophilia caution.
const HYPEREOSINOPHILIA: f64 = 1500.0;

impl BiologicScorer for AntiIl4Il13 {
    fn drug(&self) -> BiologicDrug {
        BiologicDrug::Dupilumab
    }

    fn eligibility(&self, profile: &BiomarkerProfile) -> Option<String> {
        let mut criteria = Vec::new();
        if profile.eosinophils >= 150.0 {
            criteria.push(format!("eosinophils {:.0} cells/µL", profile.eosinophils));
        }
        if profile.feno >= 25.0 {
            criteria.push(format!("FeNO {:.0} ppb", profile.feno));
        }
        if profile.maintenance_ocs {
            criteria.push("maintenance OCS".to_string());
        }
        if criteria.is_empty() {
            return None;
        }

        let mut text = format!("Type 2 or OCS-dependent: {}", criteria.join(", "));
        if profile.eosinophils >= HYPEREOSINOPHILIA {
            text.push_str(". Caution: eosinophils ≥ 1500 cells/µL, exclude hypereosinophilic disease first");
        }
        Some(text)
    }

    fn score_sheet(&self, profile: &BiomarkerProfile) -> ScoreSheet {
        let mut sheet = ScoreSheet::base(60, "Type 2 phenotype");
        sheet.add_if(
            (150.0..HYPEREOSINOPHILIA).contains(&profile.eosinophils),
            10,
            "Eosinophils 150–1499 cells/µL",
        );
        if profile.feno >= 25.0 {
            sheet.add(10, "FeNO ≥ 25 ppb");
            sheet.add_if(profile.feno >= 50.0, 15, "FeNO ≥ 50 ppb");
        }
        sheet.add_if(profile.atopic_dermatitis, 20, "Atopic dermatitis");
        sheet.add_if(profile.nasal_polyps, 20, "Nasal polyps");
        sheet.add_if(profile.maintenance_ocs, 15, "Reduces maintenance OCS");
        sheet
    }

    fn strength(&self, profile: &BiomarkerProfile) -> StrengthTier {
        if profile.feno >= 50.0 || profile.eosinophils >= 300.0 || profile.maintenance_ocs {
            StrengthTier::Prioritized
        } else {
            StrengthTier::Recommended
        }
    }
}
