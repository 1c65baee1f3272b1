use gina_core::models::observation::{ClinicalObservation, Comorbidity, OnsetCategory};
use gina_core::models::recommendation::{BiologicDrug, Pathway, StrengthTier};
use gina_engine::biologics::{self, BiologicScorer, BiomarkerProfile, get_scorer};

fn scenario() -> ClinicalObservation {
    let mut observation = ClinicalObservation::default();
    observation.basic_info.exacerbations_last_year = "2".into();
    observation.biomarkers.blood_eosinophils = "350".into();
    observation.biomarkers.feno = "60".into();
    observation
}

fn drugs(observation: &ClinicalObservation) -> Vec<BiologicDrug> {
    biologics::score(observation).iter().map(|r| r.drug).collect()
}

#[test]
fn scenario_ranks_il5_above_tslp_and_omits_anti_ige() {
    let ranked = biologics::score(&scenario());

    assert_eq!(
        ranked.iter().map(|r| (r.drug, r.score)).collect::<Vec<_>>(),
        vec![
            (BiologicDrug::Mepolizumab, 95),
            (BiologicDrug::Benralizumab, 95),
            (BiologicDrug::Dupilumab, 95),
            (BiologicDrug::Tezepelumab, 70),
        ]
    );
    assert_eq!(ranked[0].pathway, Pathway::AntiIl5);
    assert_eq!(ranked[0].strength, StrengthTier::Prioritized);

    let tslp = ranked.last().unwrap();
    assert_eq!(tslp.strength, StrengthTier::Recommended);
}

#[test]
fn scoring_is_deterministic() {
    let observation = scenario();
    assert_eq!(biologics::score(&observation), biologics::score(&observation));
}

#[test]
fn anti_ige_appears_once_ige_reaches_30() {
    let mut observation = scenario();
    observation.biomarkers.sensitized_perennial = true;
    observation.biomarkers.total_ige = "20".into();
    assert!(!drugs(&observation).contains(&BiologicDrug::Omalizumab));

    observation.biomarkers.total_ige = "40".into();
    assert!(drugs(&observation).contains(&BiologicDrug::Omalizumab));
}

#[test]
fn anti_ige_requires_sensitization() {
    let mut observation = ClinicalObservation::default();
    observation.biomarkers.total_ige = "400".into();
    assert!(!drugs(&observation).contains(&BiologicDrug::Omalizumab));

    observation.biomarkers.sensitized_seasonal = true;
    assert!(drugs(&observation).contains(&BiologicDrug::Omalizumab));
}

#[test]
fn anti_ige_points() {
    let mut observation = ClinicalObservation::default();
    observation.biomarkers.total_ige = "150".into();
    observation.biomarkers.sensitized_perennial = true;
    observation.basic_info.exacerbations_last_year = "1".into();
    observation.basic_info.onset = Some(OnsetCategory::Childhood);
    observation.symptoms.allergen_driven = true;

    let omalizumab = |o: &ClinicalObservation| {
        biologics::score(o)
            .into_iter()
            .find(|r| r.drug == BiologicDrug::Omalizumab)
            .unwrap()
    };
    assert_eq!(omalizumab(&observation).score, 100);

    observation.biomarkers.feno = "55".into();
    let penalized = omalizumab(&observation);
    assert_eq!(penalized.score, 95);
    assert!(penalized.rationale.contains("favour other classes"));
}

#[test]
fn il5_tier_follows_eosinophil_count() {
    let mut observation = ClinicalObservation::default();
    observation.biomarkers.blood_eosinophils = "200".into();
    observation.basic_info.onset = Some(OnsetCategory::Adult);
    observation.comorbidities.push(Comorbidity::NasalPolyps);

    let ranked = biologics::score(&observation);
    let mepolizumab = ranked
        .iter()
        .find(|r| r.drug == BiologicDrug::Mepolizumab)
        .unwrap();
    assert_eq!(mepolizumab.score, 60 + 15 + 5);
    assert_eq!(mepolizumab.strength, StrengthTier::Recommended);
    assert!(mepolizumab.eligibility.contains("200"));
}

#[test]
fn il4_il13_scores_clamp_at_100() {
    let mut observation = ClinicalObservation::default();
    observation.biomarkers.blood_eosinophils = "400".into();
    observation.biomarkers.feno = "80".into();
    observation.medications.maintenance_ocs = true;
    observation.comorbidities = vec![Comorbidity::AtopicDermatitis, Comorbidity::NasalPolyps];

    let dupilumab = biologics::score(&observation)
        .into_iter()
        .find(|r| r.drug == BiologicDrug::Dupilumab)
        .unwrap();
    assert_eq!(dupilumab.score, 100);
    assert_eq!(dupilumab.strength, StrengthTier::Prioritized);
}

#[test]
fn il4_il13_flags_hypereosinophilia() {
    let mut observation = ClinicalObservation::default();
    observation.biomarkers.blood_eosinophils = "1600".into();

    let dupilumab = biologics::score(&observation)
        .into_iter()
        .find(|r| r.drug == BiologicDrug::Dupilumab)
        .unwrap();
    assert_eq!(dupilumab.score, 60);
    assert!(dupilumab.eligibility.contains("hypereosinophilic"));
}

#[test]
fn il4_il13_is_eligible_on_ocs_alone() {
    let mut observation = ClinicalObservation::default();
    observation.medications.maintenance_ocs = true;
    assert_eq!(
        drugs(&observation),
        vec![BiologicDrug::Tezepelumab, BiologicDrug::Dupilumab]
    );
}

#[test]
fn tslp_is_prioritized_when_type2_biomarkers_are_low() {
    let mut observation = ClinicalObservation::default();
    observation.basic_info.exacerbations_last_year = "1".into();
    observation.biomarkers.blood_eosinophils = "100".into();
    observation.biomarkers.feno = "12".into();

    let ranked = biologics::score(&observation);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].drug, BiologicDrug::Tezepelumab);
    assert_eq!(ranked[0].score, 85);
    assert_eq!(ranked[0].strength, StrengthTier::PrioritizedNonType2);
}

#[test]
fn nothing_is_recommended_without_a_gate_passing() {
    assert!(biologics::score(&ClinicalObservation::default()).is_empty());
}

#[test]
fn registry_covers_the_catalog_in_order() {
    let registered: Vec<_> = biologics::all_scorers().iter().map(|s| s.drug()).collect();
    assert_eq!(registered, BiologicDrug::CATALOG.to_vec());

    let scorer = get_scorer(BiologicDrug::Benralizumab).unwrap();
    let profile = BiomarkerProfile::from_observation(&scenario());
    assert_eq!(scorer.recommend(&profile).unwrap().score, 95);
}
