//! `config` subcommand

use crate::args::ConfigSubcommand;
use course_path::config::Config;
use course_path::info;
use std::io::{self, BufRead, Write};

/// Keys accepted by `config get/set/unset`
const KEYS: [&str; 7] = [
    "level",
    "file",
    "verbose",
    "total_credits",
    "credits_per_term",
    "min_gpa",
    "transcripts_dir",
];

/// Dispatch config subcommands
///
/// # Errors
/// Returns a message for unknown keys, invalid values, or file failures.
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => {
            show(config, None);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key }) => {
            if let Some(k) = &key {
                if config.get(k).is_none() {
                    return Err(unknown_key(k));
                }
            }
            show(config, key.as_deref());
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            persist(config)?;
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults).map_err(|_| unknown_key(&key))?;
            persist(config)?;
            println!("✓ Reset {key} to default");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    }
}

fn show(config: &Config, key: Option<&str>) {
    match key.and_then(|k| config.get(k)) {
        Some(value) => println!("{value}"),
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
}

fn unknown_key(key: &str) -> String {
    format!("Unknown config key: '{key}' (known keys: {})", KEYS.join(", "))
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Config saved to {}", Config::get_config_file_path().display());
    Ok(())
}

fn reset(input: &mut impl BufRead) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    input.read_line(&mut response).ok();

    if is_confirmation(&response) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn is_confirmation(response: &str) -> bool {
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
