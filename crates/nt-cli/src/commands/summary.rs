//! Summary command: totals, macro chart and tips for a day of meals.
//!
//! The energy estimate is shown next to the totals for information only;
//! intake is not compared against it.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use nt_core::{
    EnergyEstimate, MacroShares, MealEntry, NutritionLedger, NutritionTotals, Tip, UserProfile,
    generate_tips,
};

use crate::input::build_ledger;
use crate::render;

/// Everything the summary shows, in JSON-ready form.
#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    pub profile: &'a UserProfile,
    pub energy: EnergyEstimate,
    pub meals: &'a [MealEntry],
    pub totals: NutritionTotals,
    pub macro_shares: Option<MacroShares>,
    pub tips: Vec<Tip>,
}

/// Computes the report for a profile and ledger.
pub fn build_report<'a>(
    profile: &'a UserProfile,
    ledger: &'a NutritionLedger,
) -> Result<SummaryReport<'a>> {
    let energy = profile
        .energy_estimate()
        .context("failed to estimate daily energy")?;
    let totals = ledger.totals();
    Ok(SummaryReport {
        profile,
        energy,
        meals: ledger.entries(),
        totals,
        macro_shares: totals.macro_shares(),
        tips: generate_tips(profile, &totals),
    })
}

fn write_text<W: Write>(writer: &mut W, report: &SummaryReport<'_>) -> Result<()> {
    render::write_profile(writer, report.profile)?;
    render::write_energy(writer, &report.energy)?;
    writeln!(writer)?;
    render::write_meals(writer, report.meals)?;
    writeln!(writer)?;
    render::write_totals(writer, &report.totals)?;
    writeln!(writer)?;
    render::write_chart(writer, &report.totals)?;
    writeln!(writer)?;
    render::write_tips(writer, &report.tips)?;
    Ok(())
}

pub fn run<W: Write>(
    writer: &mut W,
    profile: &UserProfile,
    meals: &[MealEntry],
    json: bool,
) -> Result<()> {
    let ledger = build_ledger(meals)?;
    let report = build_report(profile, &ledger)?;

    if json {
        serde_json::to_writer_pretty(&mut *writer, &report)
            .context("failed to serialize summary")?;
        writeln!(writer)?;
    } else {
        write_text(writer, &report)?;
    }
    Ok(())
}
