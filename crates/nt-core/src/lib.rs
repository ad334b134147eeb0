//! Core domain logic for the nutrition tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Energy: estimating daily energy requirements from biometrics
//! - Ledger: the append-only meal log and its totals
//! - Tips: threshold rules over the profile and the day's totals
//!
//! Nothing here performs I/O. The caller owns the ledger and passes it in.

mod energy;
mod ledger;
mod profile;
mod tips;
mod types;

pub use energy::{EnergyEstimate, basal_estimate, estimate_daily_energy};
pub use ledger::{MacroShares, MealEntry, NutritionLedger, NutritionTotals};
pub use profile::UserProfile;
pub use tips::{Tip, TipKind, generate_tips};
pub use types::{ActivityLevel, InvalidInput};
