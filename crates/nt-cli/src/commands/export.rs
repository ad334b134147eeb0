//! Export command: write meals and profile as CSV or XLSX.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use nt_core::{MealEntry, UserProfile};
use nt_export::{ExportFormat, ExportTable};

use crate::config::ExportConfig;
use crate::input::build_ledger;
use crate::render;

/// Path meaning "write to stdout".
const STDOUT_PATH: &str = "-";

/// Where the export goes when no `--output` is given.
pub fn default_output_path(config: &ExportConfig, format: ExportFormat) -> PathBuf {
    config.directory.join(format.default_file_name())
}

pub fn run<W: Write>(
    writer: &mut W,
    profile: &UserProfile,
    meals: &[MealEntry],
    format: ExportFormat,
    output: Option<&Path>,
    config: &ExportConfig,
) -> Result<()> {
    let ledger = build_ledger(meals)?;
    let table = ExportTable::new(profile, ledger.entries(), config.profile_layout)?;

    if output.is_some_and(|p| p.as_os_str() == STDOUT_PATH) {
        if format != ExportFormat::Csv {
            bail!("{format} output cannot be written to stdout; pass a file path with --output");
        }
        nt_export::write_csv(&table, &mut *writer).context("failed to write CSV")?;
        return Ok(());
    }

    let path = output.map_or_else(|| default_output_path(config, format), Path::to_path_buf);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    nt_export::write_to_path(&table, format, &path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    writeln!(
        writer,
        "Exported {} to {}",
        render::meal_count(table.len()),
        path.display()
    )?;
    Ok(())
}
