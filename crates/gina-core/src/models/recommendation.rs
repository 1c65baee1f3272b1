use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Biologic drugs the scorer knows about, in catalog order.
///
/// Catalog order is the tie-break for equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BiologicDrug {
    Omalizumab,
    Mepolizumab,
    Benralizumab,
    Dupilumab,
    Tezepelumab,
}

impl BiologicDrug {
    pub const CATALOG: [BiologicDrug; 5] = [
        BiologicDrug::Omalizumab,
        BiologicDrug::Mepolizumab,
        BiologicDrug::Benralizumab,
        BiologicDrug::Dupilumab,
        BiologicDrug::Tezepelumab,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Omalizumab => "Omalizumab",
            Self::Mepolizumab => "Mepolizumab",
            Self::Benralizumab => "Benralizumab",
            Self::Dupilumab => "Dupilumab",
            Self::Tezepelumab => "Tezepelumab",
        }
    }

    pub fn pathway(&self) -> Pathway {
        match self {
            Self::Omalizumab => Pathway::AntiIge,
            Self::Mepolizumab | Self::Benralizumab => Pathway::AntiIl5,
            Self::Dupilumab => Pathway::AntiIl4Il13,
            Self::Tezepelumab => Pathway::AntiTslp,
        }
    }
}

impl fmt::Display for BiologicDrug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Pathway {
    AntiIge,
    AntiIl5,
    AntiIl4Il13,
    AntiTslp,
}

impl Pathway {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AntiIge => "Anti-IgE",
            Self::AntiIl5 => "Anti-IL-5/5R",
            Self::AntiIl4Il13 => "Anti-IL-4Rα (IL-4/IL-13)",
            Self::AntiTslp => "Anti-TSLP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StrengthTier {
    Prioritized,
    Recommended,
    /// Favoured specifically because Type 2 biomarkers are low.
    PrioritizedNonType2,
}

impl StrengthTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prioritized => "Prioritized",
            Self::Recommended => "Recommended",
            Self::PrioritizedNonType2 => "Prioritized (non-Type-2)",
        }
    }
}

/// One ranked entry. Recomputed on every request, never stored as a cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BiologicRecommendation {
    pub drug: BiologicDrug,
    pub pathway: Pathway,
    /// 0–100.
    pub score: u8,
    pub rationale: String,
    pub eligibility: String,
    pub strength: StrengthTier,
}
