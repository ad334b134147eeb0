//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected profile or meal input.
///
/// The core never clamps: anything outside its preconditions is reported
/// back to the caller as one of these variants.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInput {
    /// A value that must be strictly positive was zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// A value that must be non-negative was negative.
    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// The value was NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Adding an entry would push a running total past the `f64` range.
    #[error("{field} total is too large to record")]
    TotalOverflow { field: &'static str },

    /// The activity level text did not name one of the known levels.
    #[error(
        "unknown activity level: {value:?} (expected sedentary, lightly-active, moderately-active, very-active or extra-active)"
    )]
    UnknownActivityLevel { value: String },
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if !value.is_finite() {
        return Err(InvalidInput::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(InvalidInput::NotPositive { field, value });
    }
    Ok(value)
}

/// Checks that `value` is finite and not negative.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if !value.is_finite() {
        return Err(InvalidInput::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InvalidInput::Negative { field, value });
    }
    Ok(value)
}

/// How physically active the user is on a typical day.
///
/// Serialized in kebab-case. Parsing is lenient about case and separators so
/// that `"Lightly Active"`, `"lightly-active"` and `"lightly_active"` all
/// name the same level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// Light exercise 1-3 days a week.
    LightlyActive,
    /// Moderate exercise 3-5 days a week.
    ModeratelyActive,
    /// Hard exercise 6-7 days a week.
    VeryActive,
    /// Very hard exercise or a physical job.
    ExtraActive,
}

impl ActivityLevel {
    /// Every level, from least to most active.
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Machine-readable name, as used in config files and flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly-active",
            Self::ModeratelyActive => "moderately-active",
            Self::VeryActive => "very-active",
            Self::ExtraActive => "extra-active",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtraActive => "Extra Active",
        }
    }

    /// Factor applied to the basal estimate to get daily expenditure.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match compact.as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightlyactive" => Ok(Self::LightlyActive),
            "moderatelyactive" => Ok(Self::ModeratelyActive),
            "veryactive" => Ok(Self::VeryActive),
            "extraactive" => Ok(Self::ExtraActive),
            _ => Err(InvalidInput::UnknownActivityLevel {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ActivityLevel {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
