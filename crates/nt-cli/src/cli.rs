//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nt_core::{ActivityLevel, MealEntry};
use nt_export::ExportFormat;

use crate::input::{parse_format, parse_meal};

/// Personal diet and nutrition tracker.
///
/// Log meals, see daily totals and macronutrient balance, get simple dietary
/// tips, and export the log as CSV or a spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "nutritrack", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Profile overrides. Anything left unset comes from the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct ProfileArgs {
    /// Your name, shown in exports.
    #[arg(long)]
    pub name: Option<String>,

    /// Body weight in kg (30-200).
    #[arg(long, value_name = "KG")]
    pub weight: Option<f64>,

    /// Height in cm (100-250).
    #[arg(long, value_name = "CM")]
    pub height: Option<f64>,

    /// Age in years (10-100).
    #[arg(long, value_name = "YEARS")]
    pub age: Option<u32>,

    /// Activity level: sedentary, lightly-active, moderately-active,
    /// very-active or extra-active.
    #[arg(long, value_name = "LEVEL")]
    pub activity: Option<ActivityLevel>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Estimate daily energy needs from your profile.
    Energy {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show totals, macronutrient chart and tips for a day of meals.
    Summary {
        #[command(flatten)]
        profile: ProfileArgs,

        /// A meal as NAME,CALORIES,PROTEIN,CARBS,FATS (repeatable).
        #[arg(long = "meal", value_name = "MEAL", value_parser = parse_meal)]
        meals: Vec<MealEntry>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Export meals with your profile as CSV or XLSX.
    Export {
        #[command(flatten)]
        profile: ProfileArgs,

        /// A meal as NAME,CALORIES,PROTEIN,CARBS,FATS (repeatable).
        #[arg(long = "meal", value_name = "MEAL", value_parser = parse_meal, required = true)]
        meals: Vec<MealEntry>,

        /// Output format [default: `export.format` from config, else csv].
        #[arg(long, value_parser = parse_format)]
        format: Option<ExportFormat>,

        /// Output path, or `-` for stdout (CSV only).
        /// Defaults to `nutritrack_data.<ext>` in the configured export directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Log meals interactively, one request per line on stdin.
    Session {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print the effective configuration.
    Config,
}
