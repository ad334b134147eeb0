//! Threshold-based dietary tips.
//!
//! Every rule is evaluated independently and all that apply are emitted, in
//! the order of [`TipKind`]. Weight rules look at the profile, macro rules
//! at the day's totals.

use std::fmt;

use serde::Serialize;

use crate::ledger::NutritionTotals;
use crate::profile::UserProfile;

/// Weight below which the low-weight tip fires.
pub const LOW_WEIGHT_KG: f64 = 50.0;

/// Weight above which the high-weight tip fires.
pub const HIGH_WEIGHT_KG: f64 = 100.0;

/// Daily protein below which the protein tip fires.
pub const MIN_PROTEIN_G: f64 = 50.0;

/// Daily carbohydrates below which the carbs tip fires.
pub const MIN_CARBS_G: f64 = 100.0;

/// Daily fats below which the fats tip fires.
pub const MIN_FATS_G: f64 = 30.0;

/// The rule that produced a tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    LowWeight,
    HighWeight,
    LowProtein,
    LowCarbs,
    LowFats,
}

impl TipKind {
    /// Advice shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LowWeight => {
                "Your weight is below the healthy range. Consider increasing your calorie intake with nutrient-rich foods."
            }
            Self::HighWeight => {
                "Your weight is above the healthy range. Consider a balanced diet and regular exercise."
            }
            Self::LowProtein => {
                "You are not consuming enough protein. Add more protein-rich foods like eggs, chicken, and beans."
            }
            Self::LowCarbs => {
                "You are not consuming enough carbs. Add more carb-rich foods like rice, bread, and fruits."
            }
            Self::LowFats => {
                "You are not consuming enough fats. Add more healthy fats like nuts, avocados, and olive oil."
            }
        }
    }
}

/// An advisory message and the rule behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub kind: TipKind,
    pub message: &'static str,
}

impl From<TipKind> for Tip {
    fn from(kind: TipKind) -> Self {
        Self {
            kind,
            message: kind.message(),
        }
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Evaluates every rule against the profile and totals.
pub fn generate_tips(profile: &UserProfile, totals: &NutritionTotals) -> Vec<Tip> {
    let rules = [
        (profile.weight_kg < LOW_WEIGHT_KG, TipKind::LowWeight),
        (profile.weight_kg > HIGH_WEIGHT_KG, TipKind::HighWeight),
        (totals.protein_g < MIN_PROTEIN_G, TipKind::LowProtein),
        (totals.carbs_g < MIN_CARBS_G, TipKind::LowCarbs),
        (totals.fats_g < MIN_FATS_G, TipKind::LowFats),
    ];

    let tips: Vec<Tip> = rules
        .into_iter()
        .filter(|(fires, _)| *fires)
        .map(|(_, kind)| Tip::from(kind))
        .collect();
    tracing::trace!(count = tips.len(), "tips generated");
    tips
}
