//! Parsing and range checks for user-entered values.
//!
//! The core only rejects values it cannot compute with. The tighter form
//! ranges below are enforced here, before a profile reaches the core.

use std::fmt::Display;
use std::ops::RangeInclusive;

use anyhow::{Context, Result, bail};
use nt_core::{MealEntry, NutritionLedger, UserProfile};
use nt_export::ExportFormat;

use crate::cli::ProfileArgs;

/// Accepted body weight in kg.
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=200.0;

/// Accepted height in cm.
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;

/// Accepted age in years.
pub const AGE_RANGE_YEARS: RangeInclusive<u32> = 10..=100;

fn check_range<T: PartialOrd + Display>(
    field: &str,
    value: T,
    range: &RangeInclusive<T>,
    unit: &str,
) -> Result<()> {
    if !range.contains(&value) {
        bail!(
            "{field} must be between {} and {} {unit}, got {value}",
            range.start(),
            range.end()
        );
    }
    Ok(())
}

/// Overlays command-line overrides on the configured profile and validates it.
pub fn resolve_profile(defaults: &UserProfile, args: &ProfileArgs) -> Result<UserProfile> {
    let profile = UserProfile {
        name: args.name.clone().unwrap_or_else(|| defaults.name.clone()),
        weight_kg: args.weight.unwrap_or(defaults.weight_kg),
        height_cm: args.height.unwrap_or(defaults.height_cm),
        age_years: args.age.unwrap_or(defaults.age_years),
        activity_level: args.activity.unwrap_or(defaults.activity_level),
    };

    check_range("weight", profile.weight_kg, &WEIGHT_RANGE_KG, "kg")?;
    check_range("height", profile.height_cm, &HEIGHT_RANGE_CM, "cm")?;
    check_range("age", profile.age_years, &AGE_RANGE_YEARS, "years")?;
    profile.validate().context("invalid profile")?;

    tracing::debug!(?profile, "resolved profile");
    Ok(profile)
}

/// Parses `NAME,CALORIES,PROTEIN,CARBS,FATS`.
///
/// The name is everything before the last four commas, so it may itself
/// contain commas or be empty.
pub fn parse_meal(s: &str) -> Result<MealEntry, String> {
    let mut parts = s.rsplitn(5, ',');
    let (Some(fats), Some(carbs), Some(protein), Some(calories), Some(name)) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return Err(format!(
            "expected NAME,CALORIES,PROTEIN,CARBS,FATS, got {s:?}"
        ));
    };

    let number = |label: &str, raw: &str| {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| format!("{label} is not a number: {raw:?}"))
    };

    MealEntry::new(
        name.trim(),
        number("calories", calories)?,
        number("protein", protein)?,
        number("carbs", carbs)?,
        number("fats", fats)?,
    )
    .map_err(|e| e.to_string())
}

/// Parses an export format name for clap.
pub fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse().map_err(|e: nt_export::ExportError| e.to_string())
}

/// Builds a ledger from meals given on the command line.
pub fn build_ledger(meals: &[MealEntry]) -> Result<NutritionLedger> {
    let mut ledger = NutritionLedger::new();
    for meal in meals {
        ledger
            .add_entry(meal.clone())
            .with_context(|| format!("invalid meal {:?}", meal.name))?;
    }
    Ok(ledger)
}
