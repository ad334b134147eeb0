//! Append-only meal log and its aggregate totals.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::types::{InvalidInput, require_non_negative};

/// One logged meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Free-form label such as "Breakfast". May be empty or repeated.
    pub name: String,
    /// Energy in kcal.
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl MealEntry {
    /// Creates an entry after validation.
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fats_g: f64,
    ) -> Result<Self, InvalidInput> {
        let entry = Self {
            name: name.into(),
            calories,
            protein_g,
            carbs_g,
            fats_g,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Checks that every numeric field is finite and non-negative.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        require_non_negative("calories", self.calories)?;
        require_non_negative("protein_g", self.protein_g)?;
        require_non_negative("carbs_g", self.carbs_g)?;
        require_non_negative("fats_g", self.fats_g)?;
        Ok(())
    }
}

/// Field-wise sums over a set of meals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

/// Percentage of macronutrient grams contributed by each macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroShares {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fats_pct: f64,
}

impl NutritionTotals {
    /// Totals of an empty log.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fats_g: 0.0,
        }
    }

    /// Chart inputs: `[protein_g, carbs_g, fats_g]`.
    #[must_use]
    pub const fn macros(&self) -> [f64; 3] {
        [self.protein_g, self.carbs_g, self.fats_g]
    }

    /// Each macro as a percentage of total macro grams.
    ///
    /// Returns `None` when no macro grams have been logged.
    #[must_use]
    pub fn macro_shares(&self) -> Option<MacroShares> {
        let sum: f64 = self.macros().iter().sum();
        if sum <= 0.0 {
            return None;
        }
        Some(MacroShares {
            protein_pct: self.protein_g / sum * 100.0,
            carbs_pct: self.carbs_g / sum * 100.0,
            fats_pct: self.fats_g / sum * 100.0,
        })
    }

    fn require_finite(&self) -> Result<(), InvalidInput> {
        for (field, value) in [
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("carbs_g", self.carbs_g),
            ("fats_g", self.fats_g),
        ] {
            if !value.is_finite() {
                return Err(InvalidInput::TotalOverflow { field });
            }
        }
        Ok(())
    }
}

impl From<&MealEntry> for NutritionTotals {
    fn from(entry: &MealEntry) -> Self {
        Self {
            calories: entry.calories,
            protein_g: entry.protein_g,
            carbs_g: entry.carbs_g,
            fats_g: entry.fats_g,
        }
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fats_g: self.fats_g + other.fats_g,
        }
    }
}

impl std::iter::Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, t| acc + t)
    }
}

/// The meals logged during one session, in the order they were added.
///
/// Entries can only be appended. The running totals are updated on every
/// append, in entry order, so they equal the field-wise sum of what is held.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionLedger {
    entries: Vec<MealEntry>,
    totals: NutritionTotals,
}

impl NutritionLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            totals: NutritionTotals::zero(),
        }
    }

    /// Appends a meal, rejecting negative or non-finite amounts.
    ///
    /// An entry that would make any total non-finite is rejected as well,
    /// so totals are always finite.
    pub fn add_entry(&mut self, entry: MealEntry) -> Result<(), InvalidInput> {
        entry.validate()?;
        let totals = self.totals + NutritionTotals::from(&entry);
        totals.require_finite()?;
        tracing::debug!(
            name = %entry.name,
            calories = entry.calories,
            position = self.entries.len(),
            "meal added"
        );
        self.entries.push(entry);
        self.totals = totals;
        Ok(())
    }

    /// Field-wise sum over all entries; zero when empty.
    #[must_use]
    pub const fn totals(&self) -> NutritionTotals {
        self.totals
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MealEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a NutritionLedger {
    type Item = &'a MealEntry;
    type IntoIter = std::slice::Iter<'a, MealEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
