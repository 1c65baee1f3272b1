use gina_core::models::observation::{ClinicalObservation, Comorbidity, OnsetCategory};

/// The normalized inputs every scorer reads, extracted once per ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BiomarkerProfile {
    pub eosinophils: f64,
    pub feno: f64,
    pub total_ige: f64,
    pub exacerbations: f64,
    pub allergen_sensitized: bool,
    pub allergen_driven: bool,
    pub childhood_onset: bool,
    pub adult_onset: bool,
    pub nasal_polyps: bool,
    pub atopic_dermatitis: bool,
    pub maintenance_ocs: bool,
}

impl BiomarkerProfile {
    pub fn from_observation(observation: &ClinicalObservation) -> Self {
        let biomarkers = &observation.biomarkers;
        let onset = observation.basic_info.onset;
        Self {
            eosinophils: biomarkers.blood_eosinophils.value(),
            feno: biomarkers.feno.value(),
            total_ige: biomarkers.total_ige.value(),
            exacerbations: observation.basic_info.exacerbations_last_year.value(),
            allergen_sensitized: biomarkers.allergen_sensitized(),
            allergen_driven: observation.symptoms.allergen_driven,
            childhood_onset: onset == Some(OnsetCategory::Childhood),
            adult_onset: onset == Some(OnsetCategory::Adult),
            nasal_polyps: observation.has_comorbidity(&Comorbidity::NasalPolyps),
            atopic_dermatitis: observation.has_comorbidity(&Comorbidity::AtopicDermatitis),
            maintenance_ocs: observation.medications.maintenance_ocs,
        }
    }

    /// Neither eosinophils nor FeNO show a Type 2 signal.
    pub fn low_type2(&self) -> bool {
        self.eosinophils < 150.0 && self.feno < 25.0
    }
}
