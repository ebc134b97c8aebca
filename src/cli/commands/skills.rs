//! `match` subcommand

use super::open_transcript;
use course_path::config::Config;
use course_path::core::skills::{calculate_skills_match, SkillsMatch};
use course_path::verbose;
use std::path::Path;

/// Compare skills against required skills and print the outcome
///
/// Skills from `transcript`, when given, are added to `skills`.
///
/// # Errors
/// Returns a message if the transcript cannot be loaded.
pub fn run(
    skills: &[String],
    required: &[String],
    transcript: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let mut user_skills = skills.to_vec();
    if let Some(path) = transcript {
        let loaded = open_transcript(path, config)?;
        verbose!("Using {} skills from {}", loaded.skills.len(), path.display());
        user_skills.extend(loaded.skills);
    }

    let result = calculate_skills_match(user_skills.as_slice(), required);
    print!("{}", render_match(&result));
    Ok(())
}

fn render_match(result: &SkillsMatch) -> String {
    let list = |skills: &[String]| {
        if skills.is_empty() {
            "(none)".to_string()
        } else {
            skills.join(", ")
        }
    };
    format!(
        "Match: {}%\nMatched: {}\nMissing: {}\n",
        result.match_percentage,
        list(result.matched_skills.as_slice()),
        list(result.missing_skills.as_slice())
    )
}
