//! Configuration resolution.
//!
//! Values come from three places, highest priority first: explicit command
//! line flags, the optional TOML file given with `--config`, and built-in
//! defaults.

use anyhow::{Context, Result};
use dashboard::DashboardSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "netflix_titles.csv";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of the TOML config file. Every key is optional.
///
/// ```toml
/// data_path = "data/netflix_titles.csv"
/// log_level = "debug"
///
/// [dashboard]
/// top_genres = 20
/// trend_start_year = 2000
///
/// [year_range]
/// from = 2010
/// to = 2021
/// ```
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub data_path: Option<String>,
    pub log_level: Option<String>,
    pub dashboard: Option<DashboardConfig>,
    /// Release years selected when no year flag is given
    pub year_range: Option<YearRangeConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub top_ratings: Option<usize>,
    pub top_genres: Option<usize>,
    pub trend_genres: Option<usize>,
    pub top_people: Option<usize>,
    pub top_countries: Option<usize>,
    pub bubble_countries: Option<usize>,
    pub ratings_per_country: Option<usize>,
    pub country_type_countries: Option<usize>,
    pub max_seasons: Option<usize>,
    pub trend_start_year: Option<i32>,
    pub duration_bin_minutes: Option<u32>,
    pub detail_limit: Option<usize>,
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(default)]
pub struct YearRangeConfig {
    pub from: Option<i32>,
    pub to: Option<i32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

impl DashboardConfig {
    /// Overlay the keys that are set onto `settings`
    fn apply(&self, settings: DashboardSettings) -> DashboardSettings {
        DashboardSettings {
            top_ratings: self.top_ratings.unwrap_or(settings.top_ratings),
            top_genres: self.top_genres.unwrap_or(settings.top_genres),
            trend_genres: self.trend_genres.unwrap_or(settings.trend_genres),
            top_people: self.top_people.unwrap_or(settings.top_people),
            top_countries: self.top_countries.unwrap_or(settings.top_countries),
            bubble_countries: self.bubble_countries.unwrap_or(settings.bubble_countries),
            ratings_per_country: self
                .ratings_per_country
                .unwrap_or(settings.ratings_per_country),
            country_type_countries: self
                .country_type_countries
                .unwrap_or(settings.country_type_countries),
            max_seasons: self.max_seasons.unwrap_or(settings.max_seasons),
            trend_start_year: self.trend_start_year.unwrap_or(settings.trend_start_year),
            duration_bin_minutes: self
                .duration_bin_minutes
                .unwrap_or(settings.duration_bin_minutes),
            detail_limit: self.detail_limit.unwrap_or(settings.detail_limit),
        }
    }
}

/// Command line values that take part in resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data: Option<PathBuf>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    /// Used when `RUST_LOG` is not set
    pub log_level: String,
    pub settings: DashboardSettings,
    /// Inclusive bounds; an open end is stored as `i32::MIN`/`i32::MAX`
    pub year_range: Option<(i32, i32)>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// CLI values override TOML values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Self {
        let file = file_config.unwrap_or_default();

        let data_path = cli
            .data
            .clone()
            .or_else(|| file.data_path.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let log_level = file
            .log_level
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let mut settings = file
            .dashboard
            .unwrap_or_default()
            .apply(DashboardSettings::default());
        if let Some(limit) = cli.limit {
            settings.detail_limit = limit;
        }

        let file_years = file.year_range.unwrap_or_default();
        let from = cli.from_year.or(file_years.from);
        let to = cli.to_year.or(file_years.to);
        let year_range = (from.is_some() || to.is_some())
            .then(|| (from.unwrap_or(i32::MIN), to.unwrap_or(i32::MAX)));

        Self {
            data_path,
            log_level,
            settings,
            year_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::resolve(&CliConfig::default(), None);

        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.settings, DashboardSettings::default());
        assert_eq!(config.year_range, None);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            data_path = "data/titles.csv"
            log_level = "debug"

            [dashboard]
            top_genres = 5
            detail_limit = 25

            [year_range]
            from = 2010
            "#,
        )
        .unwrap();

        let config = AppConfig::resolve(&CliConfig::default(), Some(file));
        assert_eq!(config.data_path, PathBuf::from("data/titles.csv"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.settings.top_genres, 5);
        assert_eq!(config.settings.detail_limit, 25);
        assert_eq!(config.settings.top_ratings, 10);
        assert_eq!(config.year_range, Some((2010, i32::MAX)));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file: FileConfig = toml::from_str(
            r#"
            data_path = "data/titles.csv"

            [dashboard]
            detail_limit = 25

            [year_range]
            from = 2010
            to = 2015
            "#,
        )
        .unwrap();
        let cli = CliConfig {
            data: Some(PathBuf::from("other.csv")),
            to_year: Some(2020),
            limit: Some(5),
            ..CliConfig::default()
        };

        let config = AppConfig::resolve(&cli, Some(file));
        assert_eq!(config.data_path, PathBuf::from("other.csv"));
        assert_eq!(config.settings.detail_limit, 5);
        assert_eq!(config.year_range, Some((2010, 2020)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"warn\"").unwrap();

        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert!(config.dashboard.is_none());
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = ").unwrap();

        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FileConfig::load(Path::new("/nonexistent/netflix-dash.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
