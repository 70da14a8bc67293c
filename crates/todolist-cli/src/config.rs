//! Configuration file
//!
//! ```toml
//! output_dir = "todo-lists"
//! file_name_template = "TO DO LIST - {month_name} {year}.xlsx"
//! min_year = 2023
//! max_year = 2050
//! column_width = 20
//! last_row = 1000
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use todolist_core::{FileNameTemplate, YearBounds};

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output_dir: Option<PathBuf>,
    pub file_name_template: Option<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub column_width: Option<f64>,
    pub last_row: Option<u32>,
}

impl Config {
    /// Looked up in the working directory when no path is given
    pub const FILE_NAME: &'static str = "todolist.toml";

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Load `explicit` if given, else `todolist.toml` from the working
    /// directory if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let local = PathBuf::from(Self::FILE_NAME);
                if !local.is_file() {
                    tracing::debug!("no {} in working directory, using defaults", Self::FILE_NAME);
                    return Ok(Self::default());
                }
                local
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&text).with_context(|| format!("In {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn year_bounds(&self) -> Result<YearBounds> {
        let defaults = YearBounds::default();
        let bounds = YearBounds::new(
            self.min_year.unwrap_or(defaults.min),
            self.max_year.unwrap_or(defaults.max),
        );
        if bounds.min > bounds.max {
            bail!(
                "Invalid configuration: min_year {} is after max_year {}",
                bounds.min,
                bounds.max
            );
        }
        Ok(bounds)
    }

    /// Template from `flag`, else the config file, else the built-in default
    pub fn template(&self, flag: Option<&str>) -> Result<FileNameTemplate> {
        match flag.or(self.file_name_template.as_deref()) {
            Some(text) => FileNameTemplate::parse(text)
                .with_context(|| format!("Invalid file name template '{text}'")),
            None => Ok(FileNameTemplate::default()),
        }
    }

    /// Output directory from `flag`, else the config file, else `.`
    pub fn output_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml(
            r#"
output_dir = "out"
file_name_template = "TO DO LIST - {month_name} {year}.xlsx"
min_year = 2023
max_year = 2040
column_width = 25.5
last_row = 500
"#,
        )
        .unwrap();

        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.year_bounds().unwrap(), YearBounds::new(2023, 2040));
        assert_eq!(config.column_width, Some(25.5));
        assert_eq!(config.last_row, Some(500));
        assert_eq!(
            config.template(None).unwrap().as_str(),
            "TO DO LIST - {month_name} {year}.xlsx"
        );
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(Config::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn inverted_year_bounds_rejected() {
        let config = Config::from_toml("min_year = 2040\nmax_year = 2030").unwrap();
        assert!(config.year_bounds().is_err());
    }

    #[test]
    fn flags_override_file() {
        let config = Config::from_toml("output_dir = \"from-file\"\nfile_name_template = \"{year}.xlsx\"")
            .unwrap();

        assert_eq!(config.output_dir(Some(Path::new("flag"))), PathBuf::from("flag"));
        assert_eq!(config.output_dir(None), PathBuf::from("from-file"));
        assert_eq!(config.template(Some("{month}.xlsx")).unwrap().as_str(), "{month}.xlsx");
        assert_eq!(config.template(None).unwrap().as_str(), "{year}.xlsx");
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let config = Config::default();
        assert_eq!(config.output_dir(None), PathBuf::from("."));
        assert_eq!(config.template(None).unwrap(), FileNameTemplate::default());
        assert_eq!(config.year_bounds().unwrap(), YearBounds::default());
    }

    #[test]
    fn bad_template_reported() {
        let err = Config::default().template(Some("{day}.xlsx")).unwrap_err();
        assert!(format!("{err:#}").contains("Unknown placeholder"));
    }

    #[test]
    fn load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(dir.path().join("nope.toml").as_path())).is_err());
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todolist.toml");
        std::fs::write(&path, "min_year = 2023\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.min_year, Some(2023));
    }
}
