//! Export layer for the nutrition tracker.
//!
//! Lays the profile and the logged meals out as one flat table and writes it
//! as CSV or as an XLSX workbook.
//!
//! # Table Layout
//!
//! Columns are fixed (see [`COLUMNS`]): the four profile fields followed by
//! the five meal fields. There is one row per meal, in ledger order. Whether
//! the profile cells are filled on every row or only on the first one is
//! controlled by [`ProfileLayout`].

mod delimited;
mod spreadsheet;

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use nt_core::{MealEntry, UserProfile};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use delimited::{csv_bytes, write_csv};
pub use spreadsheet::{SHEET_NAME, write_xlsx, xlsx_bytes};

/// Column headers, in output order.
pub const COLUMNS: [&str; 9] = [
    "Name",
    "Weight(kg)",
    "Height(cm)",
    "Age",
    "Meal",
    "Calories",
    "Protein",
    "Carbs",
    "Fats",
];

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The ledger holds no meals.
    #[error("nothing to export: no meals have been logged")]
    EmptyLedger,
    /// The requested format name is not supported.
    #[error("unknown export format: {0} (expected csv or xlsx)")]
    UnknownFormat(String),
    /// An error from the CSV writer.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// An error from the XLSX writer.
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    /// Failed to write the output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    #[serde(alias = "excel")]
    Xlsx,
}

impl ExportFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    /// File name used when the caller does not pick one.
    #[must_use]
    pub fn default_file_name(self) -> String {
        format!("nutritrack_data.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Where the profile cells appear in the exported rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileLayout {
    /// Profile cells on the first row only; later rows leave them blank.
    #[default]
    FirstRow,
    /// Profile cells repeated on every row.
    EveryRow,
}

/// A single cell of the export table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
            Self::Blank => Ok(()),
        }
    }
}

/// One row of cells, matching [`COLUMNS`].
pub type Row<'a> = [Cell<'a>; 9];

/// The profile and meals arranged for export.
#[derive(Debug, Clone, Copy)]
pub struct ExportTable<'a> {
    profile: &'a UserProfile,
    entries: &'a [MealEntry],
    layout: ProfileLayout,
}

impl<'a> ExportTable<'a> {
    /// Builds a table over the given entries.
    ///
    /// Fails with [`ExportError::EmptyLedger`] when there are no entries.
    pub fn new(
        profile: &'a UserProfile,
        entries: &'a [MealEntry],
        layout: ProfileLayout,
    ) -> Result<Self, ExportError> {
        if entries.is_empty() {
            return Err(ExportError::EmptyLedger);
        }
        Ok(Self {
            profile,
            entries,
            layout,
        })
    }

    /// Number of data rows (header excluded).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty ledgers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Data rows in ledger order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> + use<'a> {
        let profile = self.profile;
        let layout = self.layout;
        let entries = self.entries;
        entries.iter().enumerate().map(move |(i, entry)| {
            let with_profile = layout == ProfileLayout::EveryRow || i == 0;
            let [name, weight, height, age] = if with_profile {
                [
                    Cell::Text(&profile.name),
                    Cell::Number(profile.weight_kg),
                    Cell::Number(profile.height_cm),
                    Cell::Number(f64::from(profile.age_years)),
                ]
            } else {
                [Cell::Blank; 4]
            };
            [
                name,
                weight,
                height,
                age,
                Cell::Text(&entry.name),
                Cell::Number(entry.calories),
                Cell::Number(entry.protein_g),
                Cell::Number(entry.carbs_g),
                Cell::Number(entry.fats_g),
            ]
        })
    }
}

/// Writes the table to `path` in the given format, replacing any existing file.
pub fn write_to_path(
    table: &ExportTable<'_>,
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => {
            let file = File::create(path)?;
            write_csv(table, BufWriter::new(file))?;
        }
        ExportFormat::Xlsx => write_xlsx(table, path)?,
    }
    tracing::debug!(path = %path.display(), %format, rows = table.len(), "export written");
    Ok(())
}
