//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use nt_core::UserProfile;
use nt_export::{ExportFormat, ProfileLayout};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Profile used when no profile flags are given.
    pub profile: UserProfile,
    /// Export defaults.
    pub export: ExportConfig,
}

/// Where and how exports are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for exports written without an explicit path.
    pub directory: PathBuf,
    /// Format used when none is given on the command line or in a request.
    pub format: ExportFormat,
    /// Whether profile cells are filled on every row or only the first.
    pub profile_layout: ProfileLayout,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: dirs_data_path().unwrap_or_else(|| PathBuf::from(".")),
            format: ExportFormat::default(),
            profile_layout: ProfileLayout::default(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (NUTRITRACK_PROFILE__WEIGHT_KG, ...)
        figment = figment.merge(Env::prefixed("NUTRITRACK_").split("__"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for nutritrack.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("nutritrack"))
}

/// Returns the platform-specific data directory for nutritrack.
///
/// On Linux: `~/.local/share/nutritrack`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("nutritrack"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use nt_core::ActivityLevel;

    #[test]
    fn test_dirs_data_path_ends_with_nutritrack() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "nutritrack");
    }

    #[test]
    fn test_default_config_exports_to_data_dir() {
        let config = Config::default();
        assert_eq!(config.export.directory, dirs_data_path().unwrap());
        assert_eq!(config.export.format, ExportFormat::Csv);
        assert_eq!(config.export.profile_layout, ProfileLayout::FirstRow);
    }

    #[test]
    fn test_default_profile_matches_form_defaults() {
        let profile = Config::default().profile;
        assert_eq!(profile.weight_kg, 70.0);
        assert_eq!(profile.height_cm, 170.0);
        assert_eq!(profile.age_years, 25);
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
[profile]
name = "Ada"
weight_kg = 58.5
activity_level = "Moderately Active"

[export]
directory = "/tmp/nutrition"
format = "xlsx"
profile_layout = "every-row"
"#,
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.profile.name, "Ada");
        assert_eq!(config.profile.weight_kg, 58.5);
        assert_eq!(config.profile.height_cm, 170.0);
        assert_eq!(config.profile.activity_level, ActivityLevel::ModeratelyActive);
        assert_eq!(config.export.directory, PathBuf::from("/tmp/nutrition"));
        assert_eq!(config.export.format, ExportFormat::Xlsx);
        assert_eq!(config.export.profile_layout, ProfileLayout::EveryRow);
    }

    #[test]
    fn test_load_from_rejects_unknown_activity_level() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "[profile]\nactivity_level = \"couch\"\n").unwrap();

        assert!(Config::load_from(Some(&path)).is_err());
    }
}
