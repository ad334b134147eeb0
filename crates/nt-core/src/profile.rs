//! User biometrics.

use serde::{Deserialize, Serialize};

use crate::energy::{self, EnergyEstimate};
use crate::types::{ActivityLevel, InvalidInput, require_positive};

/// The person whose meals are being logged.
///
/// Fields are public so the profile can be loaded from configuration. Call
/// [`UserProfile::validate`] (or build through [`UserProfile::new`]) before
/// trusting values that came from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name. May be empty.
    #[serde(default)]
    pub name: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub activity_level: ActivityLevel,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 25,
            activity_level: ActivityLevel::Sedentary,
        }
    }
}

impl UserProfile {
    /// Creates a profile after validation.
    pub fn new(
        name: impl Into<String>,
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        activity_level: ActivityLevel,
    ) -> Result<Self, InvalidInput> {
        let profile = Self {
            name: name.into(),
            weight_kg,
            height_cm,
            age_years,
            activity_level,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that weight, height and age are strictly positive.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        require_positive("weight_kg", self.weight_kg)?;
        require_positive("height_cm", self.height_cm)?;
        if self.age_years == 0 {
            return Err(InvalidInput::NotPositive {
                field: "age_years",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Basal estimate, multiplier and daily requirement for this profile.
    pub fn energy_estimate(&self) -> Result<EnergyEstimate, InvalidInput> {
        EnergyEstimate::compute(
            self.weight_kg,
            self.height_cm,
            self.age_years,
            self.activity_level,
        )
    }

    /// Estimated daily energy requirement in kcal/day.
    pub fn estimate_daily_energy(&self) -> Result<f64, InvalidInput> {
        energy::estimate_daily_energy(
            self.weight_kg,
            self.height_cm,
            self.age_years,
            self.activity_level,
        )
    }
}
