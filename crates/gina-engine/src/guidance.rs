//! Guideline constants and the guidance text attached to transitions.
//!
//! Durations here are advisory: nothing in the workup blocks on them.

use jiff::ToSpan;
use jiff::civil::Date;

use gina_core::models::recommendation::BiologicDrug;

/// Minimum biologic trial before response is judged.
pub const MIN_TRIAL_MONTHS: i64 = 4;
/// Extended trial window for a partial or unclear response.
pub const EXTENDED_TRIAL_MONTHS: (i64, i64) = (6, 12);
/// Re-review interval after control is reached on optimized treatment.
pub const RE_REVIEW_MONTHS: i64 = 3;

pub const SEVERE_RATIONALE: &str = "Severe asthma: uncontrolled despite adherence to maximal \
     optimized high-dose ICS-LABA and management of contributory factors (GINA definition).";

pub const STEP_DOWN_RATIONALE: &str = "Uncontrolled on step-down: asthma worsened when treatment \
     was reduced, confirming the need for the higher dose. This is not a first-time failure of \
     optimized treatment.";

pub const NOT_SEVERE_RATIONALE: &str = "Difficult-to-treat asthma, not severe: control returned \
     once contributory factors were addressed.";

pub const CONTROLLED_RATIONALE: &str =
    "Controlled on optimized treatment: consider stepping down and monitor.";

pub fn re_review_date(reviewed_on: Date) -> Date {
    reviewed_on.saturating_add(RE_REVIEW_MONTHS.months())
}

pub fn earliest_evaluation(start_date: Date) -> Date {
    start_date.saturating_add(MIN_TRIAL_MONTHS.months())
}

pub fn trial_started(drug: BiologicDrug, start_date: Date) -> String {
    format!(
        "{drug} trial started {start_date}. Evaluate response after at least {MIN_TRIAL_MONTHS} \
         months (on or after {}).",
        earliest_evaluation(start_date)
    )
}

pub fn early_evaluation(start_date: Date, evaluated_on: Date) -> Option<String> {
    (evaluated_on < earliest_evaluation(start_date)).then(|| {
        format!("Evaluated before the recommended {MIN_TRIAL_MONTHS}-month minimum trial.")
    })
}

pub fn partial_response() -> String {
    let (from, to) = EXTENDED_TRIAL_MONTHS;
    format!("Partial or unclear response: extend the trial to {from}-{to} months before deciding.")
}

pub const GOOD_RESPONSE: &str =
    "Good response: continue the biologic and move to long-term monitoring.";

pub const BIOLOGIC_FAILURE: &str = "No response to a second biologic: stop biologic escalation \
     and optimize standard care.";

pub const SWITCH_BIOLOGIC: &str =
    "No response: switch to a different biologic and re-phenotype before choosing.";

pub const STOP_AND_REASSESS: &str =
    "No response: stop the biologic and reassess in monitoring.";
