//! Configuration module for `CoursePath`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::progress::{DEFAULT_CREDITS_PER_TERM, MIN_GRADUATION_GPA, TOTAL_GRADUATION_CREDITS};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory inside string values.
const DIR_VARIABLE: &str = "$COURSE_PATH";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

const fn default_total_credits() -> u32 {
    TOTAL_GRADUATION_CREDITS
}

const fn default_credits_per_term() -> f64 {
    DEFAULT_CREDITS_PER_TERM
}

const fn default_min_gpa() -> f64 {
    MIN_GRADUATION_GPA
}

/// Degree requirements used when a transcript does not state its own
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicsConfig {
    /// Credits required to graduate
    #[serde(default = "default_total_credits")]
    pub total_credits: u32,
    /// Planned credit load per term, used for graduation estimates
    #[serde(default = "default_credits_per_term")]
    pub credits_per_term: f64,
    /// Minimum cumulative GPA required to graduate
    #[serde(default = "default_min_gpa")]
    pub min_gpa: f64,
}

impl Default for AcademicsConfig {
    fn default() -> Self {
        Self {
            total_credits: TOTAL_GRADUATION_CREDITS,
            credits_per_term: DEFAULT_CREDITS_PER_TERM,
            min_gpa: MIN_GRADUATION_GPA,
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory searched for transcript files given by relative name
    #[serde(default)]
    pub transcripts_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Degree requirement settings
    #[serde(default)]
    pub academics: AcademicsConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override credits required to graduate
    pub total_credits: Option<u32>,
    /// Override planned credits per term
    pub credits_per_term: Option<f64>,
    /// Override transcripts directory
    pub transcripts_dir: Option<String>,
}

impl Config {
    /// Get the `$COURSE_PATH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursepath`
    /// - macOS: `~/Library/Application Support/coursepath`
    /// - Windows: `%APPDATA%\coursepath`
    #[must_use]
    pub fn get_coursepath_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursepath")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled; numeric fields already receive serde defaults when missing.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }
        if self.paths.transcripts_dir.is_empty() && !defaults.paths.transcripts_dir.is_empty() {
            self.paths
                .transcripts_dir
                .clone_from(&defaults.paths.transcripts_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; nothing is written to disk.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(total) = overrides.total_credits {
            self.academics.total_credits = total;
        }
        if let Some(per_term) = overrides.credits_per_term {
            self.academics.credits_per_term = per_term;
        }
        if let Some(dir) = &overrides.transcripts_dir {
            self.paths.transcripts_dir.clone_from(dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_coursepath_dir`](Self::get_coursepath_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_coursepath_dir().join(CONFIG_FILE_NAME)
    }

    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_coursepath_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// `$COURSE_PATH` in path values is expanded to the config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.transcripts_dir = Self::expand_variables(&config.paths.transcripts_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// An existing file gets missing fields merged in from defaults and is
    /// re-saved. On first run the defaults are written out. Any read or parse
    /// failure falls back to the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot be
    /// serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `total_credits`,
    /// `credits_per_term`, `min_gpa`, `transcripts_dir` (dashes are accepted
    /// in place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "total_credits" | "total-credits" => Some(self.academics.total_credits.to_string()),
            "credits_per_term" | "credits-per-term" => {
                Some(self.academics.credits_per_term.to_string())
            }
            "min_gpa" | "min-gpa" => Some(self.academics.min_gpa.to_string()),
            "transcripts_dir" | "transcripts-dir" => Some(self.paths.transcripts_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse or is
    /// out of range for that key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value
                    .parse::<crate::logger::Level>()
                    .map_err(|_| format!("Invalid log level for 'level': '{value}'"))?;
                self.logging.level = value.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "total_credits" | "total-credits" => {
                self.academics.total_credits = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid credit count for '{key}': '{value}'"))?;
            }
            "credits_per_term" | "credits-per-term" => {
                let per_term = value
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v > 0.0)
                    .ok_or_else(|| format!("Invalid positive number for '{key}': '{value}'"))?;
                self.academics.credits_per_term = per_term;
            }
            "min_gpa" | "min-gpa" => {
                let gpa = value
                    .parse::<f64>()
                    .ok()
                    .filter(|v| (0.0..=4.0).contains(v))
                    .ok_or_else(|| format!("Invalid GPA for '{key}' (0.0-4.0): '{value}'"))?;
                self.academics.min_gpa = gpa;
            }
            "transcripts_dir" | "transcripts-dir" => self.paths.transcripts_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its value in `defaults`)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "total_credits" | "total-credits" => {
                self.academics.total_credits = defaults.academics.total_credits;
            }
            "credits_per_term" | "credits-per-term" => {
                self.academics.credits_per_term = defaults.academics.credits_per_term;
            }
            "min_gpa" | "min-gpa" => self.academics.min_gpa = defaults.academics.min_gpa,
            "transcripts_dir" | "transcripts-dir" => self
                .paths
                .transcripts_dir
                .clone_from(&defaults.paths.transcripts_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the config file so the next [`load()`](Config::load) recreates it
    ///
    /// Succeeds without doing anything when no file exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[academics]")?;
        writeln!(f, "  total_credits = {}", self.academics.total_credits)?;
        writeln!(f, "  credits_per_term = {}", self.academics.credits_per_term)?;
        writeln!(f, "  min_gpa = {}", self.academics.min_gpa)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  transcripts_dir = \"{}\"", self.paths.transcripts_dir)?;

        Ok(())
    }
}
