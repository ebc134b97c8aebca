//! CLI command handlers for `CoursePath`.
//!
//! Each subcommand is implemented in its own submodule. Handlers return a
//! user-facing error message; `main` prints it and exits non-zero.

pub mod config;
pub mod progress;
pub mod skills;
pub mod transcript;

use course_path::config::Config;
use course_path::core::models::{load_transcript, Transcript};
use course_path::{debug, error, info};
use std::path::{Path, PathBuf};

/// Resolve a transcript argument to a file path
///
/// Paths that exist (or are absolute) are used as given. Otherwise a relative
/// path is looked up in the configured transcripts directory.
fn resolve_transcript_path(path: &Path, config: &Config) -> PathBuf {
    if path.exists() || path.is_absolute() || config.paths.transcripts_dir.is_empty() {
        return path.to_path_buf();
    }
    let candidate = Path::new(&config.paths.transcripts_dir).join(path);
    if candidate.exists() {
        debug!(
            "Resolved transcript {} to {}",
            path.display(),
            candidate.display()
        );
        candidate
    } else {
        path.to_path_buf()
    }
}

/// Resolve and load a transcript, logging and formatting any failure
fn open_transcript(path: &Path, config: &Config) -> Result<Transcript, String> {
    let resolved = resolve_transcript_path(path, config);
    let transcript = load_transcript(&resolved).map_err(|e| {
        error!("Failed to load transcript {}: {e}", resolved.display());
        format!("✗ Failed to load {}: {e}", resolved.display())
    })?;
    info!("Transcript loaded: {}", resolved.display());
    Ok(transcript)
}
