//! Command-line interface entry point for `CoursePath`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_path::config::Config;
use course_path::{get_version, info};
use course_path::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }
    set_level(level);

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }

    // CLI --log-file wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if init_file_logging(log_path) {
            info!("File logging initialized at: {}", log_path.display());
        } else {
            eprintln!("✗ Failed to initialize file logging at: {}", log_path.display());
        }
    }

    info!("CoursePath CLI v{}", get_version());

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Gpa { transcript } => commands::transcript::run_gpa(&transcript, &config),
        Command::Progress { completed, total } => {
            commands::progress::run(completed, total, &config)
        }
        Command::Sort { transcript } => commands::transcript::run_sort(&transcript, &config),
        Command::Match {
            required,
            skills,
            transcript,
        } => commands::skills::run(&skills, &required, transcript.as_deref(), &config),
        Command::Summary { transcript } => commands::transcript::run_summary(&transcript, &config),
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
