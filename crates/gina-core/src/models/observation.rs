use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::NumericEntry;

/// The raw record a clinician fills in while working a patient up.
///
/// Every section defaults to empty so partially completed forms deserialize.
/// Unknown fields are rejected; lifecycle state is not part of this record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, deny_unknown_fields)]
#[ts(export)]
pub struct ClinicalObservation {
    pub basic_info: BasicInfo,
    pub symptoms: Symptoms,
    pub medications: Medications,
    pub biomarkers: Biomarkers,
    pub comorbidities: Vec<Comorbidity>,
    pub risk_factors: Vec<RiskFactor>,
    pub investigations: Vec<Investigation>,
}

impl ClinicalObservation {
    pub fn has_comorbidity(&self, comorbidity: &Comorbidity) -> bool {
        self.comorbidities.contains(comorbidity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, deny_unknown_fields)]
#[ts(export)]
pub struct BasicInfo {
    pub age: NumericEntry,
    pub onset: Option<OnsetCategory>,
    pub exacerbations_last_year: NumericEntry,
    pub hospitalizations_last_year: NumericEntry,
    pub reliever_canisters_per_year: NumericEntry,
    pub diagnosis_confirmed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OnsetCategory {
    Childhood,
    Adult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, deny_unknown_fields)]
#[ts(export)]
pub struct Symptoms {
    pub poor_control: bool,
    pub frequent_exacerbations: bool,
    pub night_waking: bool,
    pub activity_limitation: bool,
    pub frequent_reliever_use: bool,
    pub allergen_driven: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, deny_unknown_fields)]
#[ts(export)]
pub struct Medications {
    pub ics_laba: bool,
    pub ics_dose: Option<IcsDose>,
    pub maintenance_ocs: bool,
    /// Prednisolone-equivalent mg/day.
    pub ocs_dose_mg: NumericEntry,
    pub adherence: Option<Adherence>,
    pub inhaler_technique: Option<InhalerTechnique>,
    pub lama: bool,
    pub ltra: bool,
    pub azithromycin: bool,
    pub mart: bool,
    /// `None` until the clinician answers whether biologics are accessible.
    pub biologics_available: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IcsDose {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Adherence {
    Good,
    Suboptimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InhalerTechnique {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, deny_unknown_fields)]
#[ts(export)]
pub struct Biomarkers {
    /// Blood eosinophils, cells/µL.
    pub blood_eosinophils: NumericEntry,
    /// Fractional exhaled nitric oxide, ppb.
    pub feno: NumericEntry,
    /// Sputum eosinophils, %.
    pub sputum_eosinophils: NumericEntry,
    /// Total serum IgE, IU/mL.
    pub total_ige: NumericEntry,
    pub sensitized_perennial: bool,
    pub sensitized_seasonal: bool,
    /// FEV1, % predicted.
    pub fev1_percent: NumericEntry,
}

impl Biomarkers {
    pub fn allergen_sensitized(&self) -> bool {
        self.sensitized_perennial || self.sensitized_seasonal
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Comorbidity {
    NasalPolyps,
    AtopicDermatitis,
    ChronicRhinosinusitis,
    AllergicRhinitis,
    Gerd,
    Obesity,
    ObstructiveSleepApnea,
    AnxietyDepression,
    InducibleLaryngealObstruction,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskFactor {
    Smoking,
    Vaping,
    OccupationalExposure,
    AllergenExposure,
    AirPollution,
    NsaidSensitivity,
    BetaBlockerUse,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Investigation {
    SpirometryReversibility,
    BronchialChallenge,
    ChestCt,
    SkinPrickTest,
    SpecificIge,
    ParasiteSerology,
    Ancas,
    Other(String),
}
