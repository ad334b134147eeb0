//! Plain-text rendering of profiles, meals, totals, the macro chart and tips.

use std::io::{self, Write};

use nt_core::{EnergyEstimate, MealEntry, NutritionTotals, Tip, UserProfile};

/// Number of cells in a chart bar.
const BAR_WIDTH: usize = 20;

/// Formats grams or kcal: whole numbers without decimals, others with one.
///
/// Non-zero amounts that one decimal would round to zero get two decimals,
/// or `<0.01` when even that is not enough.
pub fn format_amount(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else if value.abs() >= 0.05 {
        format!("{value:.1}")
    } else if value.abs() >= 0.005 {
        format!("{value:.2}")
    } else {
        "<0.01".to_string()
    }
}

/// Generates a 20-cell bar for a percentage.
/// Non-zero shares under 5% get a single cell so they stay visible.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn bar(percent: f64) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = if ratio < 0.05 && percent > 0.0 {
        1
    } else {
        (ratio * BAR_WIDTH as f64).round() as usize
    };

    let empty = BAR_WIDTH - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Meal name for display; empty names become `(unnamed)`.
pub fn display_name(name: &str) -> &str {
    if name.is_empty() { "(unnamed)" } else { name }
}

/// `1 meal`, `2 meals`.
pub fn meal_count(count: usize) -> String {
    if count == 1 {
        "1 meal".to_string()
    } else {
        format!("{count} meals")
    }
}

pub fn write_profile<W: Write>(w: &mut W, profile: &UserProfile) -> io::Result<()> {
    let name = if profile.name.is_empty() {
        String::new()
    } else {
        format!("{}, ", profile.name)
    };
    writeln!(
        w,
        "Profile: {name}{} kg, {} cm, {} years, {}",
        format_amount(profile.weight_kg),
        format_amount(profile.height_cm),
        profile.age_years,
        profile.activity_level
    )
}

/// Writes the energy estimate. The daily figure is rounded to whole kcal.
pub fn write_energy<W: Write>(w: &mut W, estimate: &EnergyEstimate) -> io::Result<()> {
    writeln!(w, "Estimated daily energy")?;
    writeln!(
        w,
        "  Basal estimate: {} kcal",
        format_amount(estimate.basal_kcal)
    )?;
    writeln!(w, "  Activity factor: x{}", estimate.activity_multiplier)?;
    writeln!(w, "  Daily estimate: {:.0} kcal", estimate.daily_kcal)
}

pub fn write_meals<W: Write>(w: &mut W, meals: &[MealEntry]) -> io::Result<()> {
    writeln!(w, "Meals")?;
    if meals.is_empty() {
        return writeln!(w, "  No meals logged yet.");
    }
    for (i, meal) in meals.iter().enumerate() {
        writeln!(
            w,
            "  {}. {}: {} kcal, protein {} g, carbs {} g, fats {} g",
            i + 1,
            display_name(&meal.name),
            format_amount(meal.calories),
            format_amount(meal.protein_g),
            format_amount(meal.carbs_g),
            format_amount(meal.fats_g)
        )?;
    }
    Ok(())
}

pub fn write_totals<W: Write>(w: &mut W, totals: &NutritionTotals) -> io::Result<()> {
    writeln!(w, "Daily totals")?;
    writeln!(w, "  Calories: {} kcal", format_amount(totals.calories))?;
    writeln!(w, "  Protein:  {} g", format_amount(totals.protein_g))?;
    writeln!(w, "  Carbs:    {} g", format_amount(totals.carbs_g))?;
    writeln!(w, "  Fats:     {} g", format_amount(totals.fats_g))
}

/// Writes a bar chart of the protein / carbs / fats split.
pub fn write_chart<W: Write>(w: &mut W, totals: &NutritionTotals) -> io::Result<()> {
    writeln!(w, "Macronutrient distribution")?;
    let Some(shares) = totals.macro_shares() else {
        return writeln!(w, "  No macronutrients logged yet.");
    };
    for (label, pct) in [
        ("Protein", shares.protein_pct),
        ("Carbs", shares.carbs_pct),
        ("Fats", shares.fats_pct),
    ] {
        writeln!(w, "  {label:<8} {} {pct:>5.1}%", bar(pct))?;
    }
    Ok(())
}

pub fn write_tips<W: Write>(w: &mut W, tips: &[Tip]) -> io::Result<()> {
    writeln!(w, "Nutrition tips")?;
    if tips.is_empty() {
        return writeln!(w, "  Nothing to flag today.");
    }
    for tip in tips {
        writeln!(w, "  - {tip}")?;
    }
    Ok(())
}
