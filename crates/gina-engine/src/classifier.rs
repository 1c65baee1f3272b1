//! Clinical classifier.
//!
//! `classify` is a pure function of the observation. Severity is a
//! retrospective label: it only holds once adherence and inhaler technique are
//! already confirmed adequate, so poor control cannot be put down to a
//! remediable cause.

use gina_core::models::assessment::ClinicalAssessment;
use gina_core::models::observation::{Adherence, ClinicalObservation, IcsDose, InhalerTechnique};

/// Blood eosinophils (cells/µL) at or above which Type 2 inflammation is assumed.
pub const EOSINOPHILS_TYPE2: f64 = 150.0;
/// FeNO (ppb) strictly above which Type 2 inflammation is assumed.
pub const FENO_TYPE2: f64 = 25.0;
/// Sputum eosinophils (%) at or above which Type 2 inflammation is assumed.
pub const SPUTUM_EOSINOPHILS_TYPE2: f64 = 2.0;

pub fn classify(observation: &ClinicalObservation) -> ClinicalAssessment {
    let symptoms = &observation.symptoms;
    let medications = &observation.medications;
    let biomarkers = &observation.biomarkers;

    let uncontrolled = symptoms.poor_control || symptoms.frequent_exacerbations;
    let high_dose_ics_laba = medications.ics_laba && medications.ics_dose == Some(IcsDose::High);

    let difficult_to_treat = uncontrolled || high_dose_ics_laba;

    let severe_asthma_confirmed = uncontrolled
        && medications.ics_laba
        && medications.adherence == Some(Adherence::Good)
        && medications.inhaler_technique == Some(InhalerTechnique::Correct);

    let type2_high = biomarkers.blood_eosinophils.value() >= EOSINOPHILS_TYPE2
        || biomarkers.feno.value() > FENO_TYPE2
        || biomarkers.sputum_eosinophils.value() >= SPUTUM_EOSINOPHILS_TYPE2
        || symptoms.allergen_driven;

    let eligible_for_biologics = severe_asthma_confirmed
        && (type2_high || medications.maintenance_ocs)
        && observation.basic_info.exacerbations_last_year.value() >= 1.0;

    ClinicalAssessment {
        difficult_to_treat,
        severe_asthma_confirmed,
        type2_high,
        eligible_for_biologics,
    }
}
