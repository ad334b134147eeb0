//! Energy command: daily energy estimate for a profile.

use std::io::Write;

use anyhow::{Context, Result};
use nt_core::UserProfile;

use crate::render;

pub fn run<W: Write>(writer: &mut W, profile: &UserProfile, json: bool) -> Result<()> {
    let estimate = profile
        .energy_estimate()
        .context("failed to estimate daily energy")?;

    if json {
        serde_json::to_writer_pretty(&mut *writer, &estimate)
            .context("failed to serialize estimate")?;
        writeln!(writer)?;
        return Ok(());
    }

    render::write_profile(writer, profile)?;
    render::write_energy(writer, &estimate)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use nt_core::ActivityLevel;

    #[test]
    fn energy_text_output() {
        let profile =
            UserProfile::new("", 60.0, 164.0, 30, ActivityLevel::ExtraActive).unwrap();
        let mut output = Vec::new();
        run(&mut output, &profile, false).unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r"
Profile: 60 kg, 164 cm, 30 years, Extra Active
Estimated daily energy
  Basal estimate: 1480 kcal
  Activity factor: x1.9
  Daily estimate: 2812 kcal
");
    }

    #[test]
    fn energy_json_output() {
        let mut output = Vec::new();
        run(&mut output, &UserProfile::default(), true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["basal_kcal"], 1642.5);
        assert_eq!(value["activity_multiplier"], 1.2);
        let daily = value["daily_kcal"].as_f64().unwrap();
        assert!((daily - 1971.0).abs() < 1e-9);
    }
}
