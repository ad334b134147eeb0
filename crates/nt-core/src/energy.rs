//! Daily energy requirement estimate.
//!
//! The basal estimate is `10 * weight_kg + 6.25 * height_cm - 5 * age_years + 5`,
//! which is the male form of the Mifflin-St Jeor equation. There is no sex
//! selector: the `+ 5` offset is applied to every profile. The basal value is
//! then scaled by the fixed multiplier of the profile's [`ActivityLevel`].
//!
//! Results keep full `f64` precision. Rounding is left to whoever displays
//! them.

use serde::Serialize;

use crate::types::{ActivityLevel, InvalidInput, require_positive};

/// kcal per kg of body weight.
pub const WEIGHT_COEF: f64 = 10.0;

/// kcal per cm of height.
pub const HEIGHT_COEF: f64 = 6.25;

/// kcal subtracted per year of age.
pub const AGE_COEF: f64 = 5.0;

/// Constant offset of the basal equation.
pub const BASAL_OFFSET: f64 = 5.0;

/// Breakdown of a daily energy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyEstimate {
    /// Basal estimate before the activity multiplier, in kcal/day.
    pub basal_kcal: f64,
    /// Multiplier looked up from the activity level.
    pub activity_multiplier: f64,
    /// Estimated daily requirement, in kcal/day.
    pub daily_kcal: f64,
}

impl EnergyEstimate {
    /// Computes the full breakdown for the given biometrics.
    pub fn compute(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        activity_level: ActivityLevel,
    ) -> Result<Self, InvalidInput> {
        let basal_kcal = basal_estimate(weight_kg, height_cm, age_years)?;
        let activity_multiplier = activity_level.multiplier();
        Ok(Self {
            basal_kcal,
            activity_multiplier,
            daily_kcal: basal_kcal * activity_multiplier,
        })
    }
}

/// Basal metabolic estimate in kcal/day.
pub fn basal_estimate(weight_kg: f64, height_cm: f64, age_years: u32) -> Result<f64, InvalidInput> {
    let weight_kg = require_positive("weight_kg", weight_kg)?;
    let height_cm = require_positive("height_cm", height_cm)?;
    if age_years == 0 {
        return Err(InvalidInput::NotPositive {
            field: "age_years",
            value: 0.0,
        });
    }

    Ok(WEIGHT_COEF * weight_kg + HEIGHT_COEF * height_cm - AGE_COEF * f64::from(age_years)
        + BASAL_OFFSET)
}

/// Estimated daily energy requirement in kcal/day.
pub fn estimate_daily_energy(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    activity_level: ActivityLevel,
) -> Result<f64, InvalidInput> {
    EnergyEstimate::compute(weight_kg, height_cm, age_years, activity_level)
        .map(|estimate| estimate.daily_kcal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn sedentary_reference_profile() {
        let kcal = estimate_daily_energy(70.0, 170.0, 25, ActivityLevel::Sedentary).unwrap();
        assert!(approx_eq(kcal, 1971.0), "got {kcal}");
    }

    #[test]
    fn basal_estimate_matches_formula() {
        let basal = basal_estimate(70.0, 170.0, 25).unwrap();
        assert!(approx_eq(basal, 1642.5), "got {basal}");
    }

    #[test]
    fn every_activity_level_scales_basal() {
        let basal = basal_estimate(82.5, 181.0, 40).unwrap();
        for level in ActivityLevel::ALL {
            let estimate = EnergyEstimate::compute(82.5, 181.0, 40, level).unwrap();
            assert!(approx_eq(estimate.basal_kcal, basal));
            assert!(approx_eq(estimate.activity_multiplier, level.multiplier()));
            assert!(approx_eq(estimate.daily_kcal, basal * level.multiplier()));
        }
    }

    #[test]
    fn extra_active_estimate() {
        // 10*60 + 6.25*165 - 5*30 + 5 = 1486.25
        let kcal = estimate_daily_energy(60.0, 165.0, 30, ActivityLevel::ExtraActive).unwrap();
        assert!(approx_eq(kcal, 1486.25 * 1.9), "got {kcal}");
    }

    #[test]
    fn estimate_is_deterministic() {
        let first = estimate_daily_energy(91.3, 177.2, 52, ActivityLevel::VeryActive).unwrap();
        for _ in 0..10 {
            let again = estimate_daily_energy(91.3, 177.2, 52, ActivityLevel::VeryActive).unwrap();
            assert_eq!(first.to_bits(), again.to_bits());
        }
    }

    #[test]
    fn rejects_non_positive_biometrics() {
        assert_eq!(
            estimate_daily_energy(0.0, 170.0, 25, ActivityLevel::Sedentary),
            Err(InvalidInput::NotPositive {
                field: "weight_kg",
                value: 0.0
            })
        );
        assert_eq!(
            estimate_daily_energy(70.0, -1.0, 25, ActivityLevel::Sedentary),
            Err(InvalidInput::NotPositive {
                field: "height_cm",
                value: -1.0
            })
        );
        assert_eq!(
            estimate_daily_energy(70.0, 170.0, 0, ActivityLevel::Sedentary),
            Err(InvalidInput::NotPositive {
                field: "age_years",
                value: 0.0
            })
        );
        assert_eq!(
            estimate_daily_energy(f64::NAN, 170.0, 25, ActivityLevel::Sedentary),
            Err(InvalidInput::NotFinite { field: "weight_kg" })
        );
    }

    #[test]
    fn unknown_activity_text_is_invalid_input() {
        let result = "marathoner"
            .parse::<ActivityLevel>()
            .and_then(|level| estimate_daily_energy(70.0, 170.0, 25, level));
        assert!(matches!(
            result,
            Err(InvalidInput::UnknownActivityLevel { .. })
        ));
    }
}
