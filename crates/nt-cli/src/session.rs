//! Interactive logging session.
//!
//! A [`Session`] owns the profile and the ledger for one run. Each input line
//! is parsed into a [`Request`] and handed to [`Session::handle`], which
//! writes its response and tells the loop whether to keep going.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use nt_core::{MealEntry, NutritionLedger, UserProfile, generate_tips};
use nt_export::{ExportFormat, ExportTable};

use crate::config::ExportConfig;
use crate::input::{parse_format, parse_meal};
use crate::render;

const HELP: &str = "\
Requests:
  add NAME,CAL,PROTEIN,CARBS,FATS   log a meal
  meals                             list logged meals
  totals                            show daily totals
  chart                             show the macronutrient chart
  tips                              show nutrition tips
  energy                            show the daily energy estimate
  export [csv|xlsx [PATH]]          write the log to a file
  help                              show this list
  quit                              end the session";

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Add(MealEntry),
    Meals,
    Totals,
    Chart,
    Tips,
    Energy,
    /// `format` falls back to the configured one when absent.
    Export {
        format: Option<ExportFormat>,
        path: Option<PathBuf>,
    },
    Help,
    Quit,
}

impl std::str::FromStr for Request {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let request = match verb.to_ascii_lowercase().as_str() {
            "add" | "meal" => Self::Add(parse_meal(rest).map_err(|e| anyhow!(e))?),
            "meals" | "list" => Self::Meals,
            "totals" => Self::Totals,
            "chart" => Self::Chart,
            "tips" => Self::Tips,
            "energy" => Self::Energy,
            "export" => {
                let (format, path) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(format, path)| (format, path.trim()));
                let format = if format.is_empty() {
                    None
                } else {
                    Some(
                        parse_format(format)
                            .map_err(|e| anyhow!(e))
                            .context("usage: export [csv|xlsx [PATH]]")?,
                    )
                };
                Self::Export {
                    format,
                    path: (!path.is_empty()).then(|| PathBuf::from(path)),
                }
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => bail!("unknown request: {verb} (type `help` for a list)"),
        };
        Ok(request)
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Profile, meal log and export settings for one session.
#[derive(Debug)]
pub struct Session {
    profile: UserProfile,
    ledger: NutritionLedger,
    export: ExportConfig,
}

impl Session {
    pub const fn new(profile: UserProfile, export: ExportConfig) -> Self {
        Self {
            profile,
            ledger: NutritionLedger::new(),
            export,
        }
    }

    pub const fn ledger(&self) -> &NutritionLedger {
        &self.ledger
    }

    /// Handles one request, writing the response to `out`.
    pub fn handle<W: Write>(&mut self, request: Request, out: &mut W) -> Result<Flow> {
        tracing::trace!(?request, "handling request");
        match request {
            Request::Add(meal) => {
                let summary = format!(
                    "{}: {} kcal",
                    render::display_name(&meal.name),
                    render::format_amount(meal.calories)
                );
                self.ledger.add_entry(meal)?;
                writeln!(
                    out,
                    "Added {summary} ({} logged)",
                    render::meal_count(self.ledger.len())
                )?;
            }
            Request::Meals => render::write_meals(out, self.ledger.entries())?,
            Request::Totals => render::write_totals(out, &self.ledger.totals())?,
            Request::Chart => render::write_chart(out, &self.ledger.totals())?,
            Request::Tips => {
                let tips = generate_tips(&self.profile, &self.ledger.totals());
                render::write_tips(out, &tips)?;
            }
            Request::Energy => {
                let estimate = self.profile.energy_estimate()?;
                render::write_energy(out, &estimate)?;
            }
            Request::Export { format, path } => {
                let format = format.unwrap_or(self.export.format);
                let path =
                    path.unwrap_or_else(|| self.export.directory.join(format.default_file_name()));
                let table = ExportTable::new(
                    &self.profile,
                    self.ledger.entries(),
                    self.export.profile_layout,
                )?;
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                nt_export::write_to_path(&table, format, &path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                writeln!(
                    out,
                    "Exported {} to {}",
                    render::meal_count(table.len()),
                    path.display()
                )?;
            }
            Request::Help => writeln!(out, "{HELP}")?,
            Request::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Reads requests from `input` until end of input or `quit`.
///
/// A failing request is reported on `out` and the loop carries on.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    prompt: bool,
) -> Result<()> {
    let mut line = String::new();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let result = trimmed
            .parse::<Request>()
            .and_then(|request| session.handle(request, out));
        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => {
                tracing::debug!(error = %err, line = trimmed, "request failed");
                writeln!(out, "error: {err:#}")?;
            }
        }
    }

    tracing::debug!(meals = session.ledger().len(), "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use nt_export::ProfileLayout;

    fn session_in(dir: &std::path::Path) -> Session {
        Session::new(
            UserProfile::default(),
            ExportConfig {
                directory: dir.to_path_buf(),
                format: ExportFormat::Csv,
                profile_layout: ProfileLayout::FirstRow,
            },
        )
    }

    fn drive(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run(session, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn request_parsing() {
        assert_eq!("  TOTALS ".parse::<Request>().unwrap(), Request::Totals);
        assert_eq!("exit".parse::<Request>().unwrap(), Request::Quit);
        assert_eq!(
            "export xlsx /tmp/day.xlsx".parse::<Request>().unwrap(),
            Request::Export {
                format: Some(ExportFormat::Xlsx),
                path: Some(PathBuf::from("/tmp/day.xlsx")),
            }
        );
        assert_eq!(
            "export csv".parse::<Request>().unwrap(),
            Request::Export {
                format: Some(ExportFormat::Csv),
                path: None,
            }
        );
        assert_eq!(
            "export".parse::<Request>().unwrap(),
            Request::Export {
                format: None,
                path: None,
            }
        );
        assert!("export pdf".parse::<Request>().is_err());
        assert!("dance".parse::<Request>().is_err());
    }

    #[test]
    fn add_then_report() {
        let temp = tempfile::tempdir().unwrap();
        let mut session = session_in(temp.path());
        let output = drive(
            &mut session,
            "add Breakfast,300,10,40,10\nadd Lunch,500,20,60,15\ntotals\ntips\n",
        );

        assert_snapshot!(output, @r"
Added Breakfast: 300 kcal (1 meal logged)
Added Lunch: 500 kcal (2 meals logged)
Daily totals
  Calories: 800 kcal
  Protein:  30 g
  Carbs:    100 g
  Fats:     25 g
Nutrition tips
  - You are not consuming enough protein. Add more protein-rich foods like eggs, chicken, and beans.
  - You are not consuming enough fats. Add more healthy fats like nuts, avocados, and olive oil.
");
        assert_eq!(session.ledger().len(), 2);
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let temp = tempfile::tempdir().unwrap();
        let mut session = session_in(temp.path());
        let output = drive(
            &mut session,
            "add Soup,-5,1,1,1\nfly\n\n# comment\nadd ,100,5,5,5\nquit\nadd Never,1,1,1,1\n",
        );

        assert_snapshot!(output, @r"
error: calories cannot be negative, got -5
error: unknown request: fly (type `help` for a list)
Added (unnamed): 100 kcal (1 meal logged)
");
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn empty_session_reports() {
        let temp = tempfile::tempdir().unwrap();
        let mut session = session_in(temp.path());
        let output = drive(&mut session, "meals\nchart\nexport csv\n");

        assert_snapshot!(output, @r"
Meals
  No meals logged yet.
Macronutrient distribution
  No macronutrients logged yet.
error: nothing to export: no meals have been logged
");
    }

    #[test]
    fn export_writes_to_configured_directory() {
        let temp = tempfile::tempdir().unwrap();
        let export_dir = temp.path().join("exports");
        let mut session = session_in(&export_dir);
        let output = drive(
            &mut session,
            "add Breakfast,300,10,40,10\nexport\nexport xlsx\n",
        );

        let csv_path = export_dir.join("nutritrack_data.csv");
        let xlsx_path = export_dir.join("nutritrack_data.xlsx");
        assert!(output.contains(&format!("Exported 1 meal to {}", csv_path.display())));
        assert_eq!(
            std::fs::read_to_string(&csv_path).unwrap(),
            "Name,Weight(kg),Height(cm),Age,Meal,Calories,Protein,Carbs,Fats\n\
             ,70,170,25,Breakfast,300,10,40,10\n"
        );
        assert!(std::fs::read(&xlsx_path).unwrap().starts_with(b"PK"));
    }

    #[test]
    fn bare_export_uses_configured_format() {
        let temp = tempfile::tempdir().unwrap();
        let mut session = Session::new(
            UserProfile::default(),
            ExportConfig {
                directory: temp.path().to_path_buf(),
                format: ExportFormat::Xlsx,
                profile_layout: ProfileLayout::EveryRow,
            },
        );
        let output = drive(&mut session, "add Dinner,700,35,80,25\nexport\n");

        let xlsx_path = temp.path().join("nutritrack_data.xlsx");
        assert!(output.contains(&format!("Exported 1 meal to {}", xlsx_path.display())));
        assert!(std::fs::read(&xlsx_path).unwrap().starts_with(b"PK"));
        assert!(!temp.path().join("nutritrack_data.csv").exists());
    }

    #[test]
    fn prompt_is_written_before_each_read() {
        let temp = tempfile::tempdir().unwrap();
        let mut session = session_in(temp.path());
        let mut out = Vec::new();
        run(&mut session, "quit\n".as_bytes(), &mut out, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> ");
    }
}
