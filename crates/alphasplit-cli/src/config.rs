//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ALPHASPLIT_INPUT`, `ALPHASPLIT_OUTPUT_DIR`,
//!    `ALPHASPLIT_OUTPUT__NO_COLOR`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`] if present
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::DEFAULT_INPUT;

const ENV_PREFIX: &str = "ALPHASPLIT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Word list read when no INPUT argument is given.
    pub input: PathBuf,
    /// Directory the letter files are written to.
    pub output_dir: PathBuf,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file, and the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. With
    /// `None`, the default location is used only if the file is there.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("input", defaults.input.to_string_lossy().into_owned())?
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("output.no_color", defaults.output.no_color)?
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.alphasplit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "alphasplit", "alphasplit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".alphasplit.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_input_is_all_words() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.input, PathBuf::from("all-words.txt"));
        assert_eq!(cfg.output_dir, PathBuf::from("."));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn optional_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.input, AppConfig::default().input);
    }

    #[test]
    fn required_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&temp.path().join("absent.toml"), true).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("alphasplit.toml");
        fs::write(
            &path,
            "input = \"dictionary.txt\"\noutput_dir = \"letters\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.input, PathBuf::from("dictionary.txt"));
        assert_eq!(cfg.output_dir, PathBuf::from("letters"));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("alphasplit.toml");
        fs::write(&path, "output_dir = \"out\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.input, PathBuf::from("all-words.txt"));
        assert_eq!(cfg.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
