//! CLI argument definitions for `CoursePath`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_path::config::ConfigOverrides;
use course_path::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Level::from(*self), f)
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `total_credits`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Compute the GPA of the completed, graded courses in a transcript.
    Gpa {
        /// Path to a transcript TOML file
        #[arg(value_name = "FILE")]
        transcript: PathBuf,
    },
    /// Show degree progress for a credit count.
    Progress {
        /// Credits completed so far
        #[arg(value_name = "COMPLETED")]
        completed: f64,

        /// Credits required (defaults to config `total_credits`)
        #[arg(value_name = "TOTAL")]
        total: Option<f64>,
    },
    /// List a transcript's courses with prerequisites first.
    Sort {
        /// Path to a transcript TOML file
        #[arg(value_name = "FILE")]
        transcript: PathBuf,
    },
    /// Compare skills against a job's required skills.
    Match {
        /// Required skills, comma separated or repeated
        #[arg(short, long, value_name = "SKILLS", value_delimiter = ',', required = true, num_args = 1..)]
        required: Vec<String>,

        /// Your skills, comma separated or repeated
        #[arg(short, long, value_name = "SKILLS", value_delimiter = ',', num_args = 1..)]
        skills: Vec<String>,

        /// Also use the skills listed in this transcript
        #[arg(short, long, value_name = "FILE")]
        transcript: Option<PathBuf>,
    },
    /// Summarize a transcript: GPA, progress, standing and course order.
    Summary {
        /// Path to a transcript TOML file
        #[arg(value_name = "FILE")]
        transcript: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "coursepath",
    about = "CoursePath academic planning command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override credits required to graduate
    #[arg(long = "total-credits", value_name = "CREDITS")]
    pub total_credits: Option<u32>,

    /// Override planned credits per term
    #[arg(long = "term-credits", value_name = "CREDITS")]
    pub term_credits: Option<f64>,

    /// Override the directory searched for transcripts
    #[arg(long = "transcripts-dir", value_name = "DIR")]
    pub transcripts_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Collect the config override flags
    #[must_use]
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|l| l.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            verbose: self.config_verbose,
            total_credits: self.total_credits,
            credits_per_term: self.term_credits,
            transcripts_dir: self
                .transcripts_dir
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_match_lists() {
        let cli = Cli::parse_from([
            "coursepath",
            "match",
            "--skills",
            "Python,SQL",
            "--required",
            "python,Java",
        ]);
        match cli.command {
            Command::Match {
                required, skills, ..
            } => {
                assert_eq!(skills, vec!["Python", "SQL"]);
                assert_eq!(required, vec!["python", "Java"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_overrides_collected() {
        let cli = Cli::parse_from([
            "coursepath",
            "--config-level",
            "debug",
            "--total-credits",
            "128",
            "--term-credits",
            "12",
            "progress",
            "30",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level.as_deref(), Some("debug"));
        assert_eq!(overrides.total_credits, Some(128));
        assert_eq!(overrides.credits_per_term, Some(12.0));
        assert!(overrides.file.is_none());
    }

    #[test]
    fn test_progress_total_optional() {
        let cli = Cli::parse_from(["coursepath", "progress", "45"]);
        assert!(matches!(
            cli.command,
            Command::Progress { total: None, .. }
        ));
    }
}
