//! `gpa`, `sort` and `summary` subcommands

use super::open_transcript;
use course_path::config::Config;
use course_path::core::models::Transcript;
use course_path::core::progress::{
    calculate_progress, estimate_time_to_graduation, AcademicStanding,
};
use course_path::core::{gpa, prereq};
use course_path::{verbose, warn};
use std::fmt;
use std::path::Path;

/// Print the GPA of a transcript's completed, graded courses
///
/// # Errors
/// Returns a message if the transcript cannot be loaded.
pub fn run_gpa(path: &Path, config: &Config) -> Result<(), String> {
    let transcript = open_transcript(path, config)?;
    let graded = transcript.graded_courses();
    let value = gpa::calculate_gpa(&graded);

    verbose!("Graded courses: {}", graded.len());
    println!("{value:.2}");
    Ok(())
}

/// Print a transcript's course ids with prerequisites first
///
/// # Errors
/// Returns a message if the transcript cannot be loaded.
pub fn run_sort(path: &Path, config: &Config) -> Result<(), String> {
    let transcript = open_transcript(path, config)?;
    report_dangling(&transcript);

    for (idx, id) in prereq::sort_by_prerequisites(&transcript.course_nodes())
        .iter()
        .enumerate()
    {
        println!("{:>3}. {id}", idx + 1);
    }
    Ok(())
}

/// Print a full academic summary of a transcript
///
/// # Errors
/// Returns a message if the transcript cannot be loaded.
pub fn run_summary(path: &Path, config: &Config) -> Result<(), String> {
    let transcript = open_transcript(path, config)?;
    report_dangling(&transcript);
    print!("{}", Summary::new(&transcript, config));
    Ok(())
}

fn report_dangling(transcript: &Transcript) {
    for (course, missing) in prereq::dangling_prerequisites(&transcript.course_nodes()) {
        warn!("{course} lists prerequisite {missing}, which is not in the transcript");
    }
}

/// Academic summary of a transcript under the configured requirements
struct Summary<'a> {
    transcript: &'a Transcript,
    config: &'a Config,
}

impl<'a> Summary<'a> {
    const fn new(transcript: &'a Transcript, config: &'a Config) -> Self {
        Self { transcript, config }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transcript = self.transcript;
        let academics = &self.config.academics;
        let required = transcript.required_credits(academics.total_credits);
        let completed = transcript.completed_credits();
        let gpa = gpa::calculate_gpa(&transcript.graded_courses());
        let progress = calculate_progress(f64::from(completed), f64::from(required));
        let standing = AcademicStanding::from_progress(progress);

        let title = if transcript.name.is_empty() {
            "Transcript"
        } else {
            transcript.name.as_str()
        };

        writeln!(f, "\n=== Summary for {title} ===")?;
        writeln!(f, "GPA: {gpa:.2}")?;
        writeln!(f, "Credits: {completed} / {required} ({progress}%)")?;
        writeln!(f, "Standing: {standing}")?;

        let remaining = transcript.remaining_credits(required);
        match estimate_time_to_graduation(f64::from(remaining), academics.credits_per_term) {
            Some(estimate) if estimate.terms > 0 => writeln!(
                f,
                "Estimated time to graduation: {} terms (~{} years) at {} credits/term",
                estimate.terms, estimate.years, academics.credits_per_term
            )?,
            Some(_) => writeln!(f, "All required credits completed")?,
            None => writeln!(
                f,
                "Estimated time to graduation: unavailable (credits per term must be positive)"
            )?,
        }

        let gpa_status = if gpa >= academics.min_gpa {
            "meets"
        } else {
            "below"
        };
        writeln!(
            f,
            "GPA requirement: {gpa_status} minimum of {:.2}",
            academics.min_gpa
        )?;

        let terms = transcript.semesters();
        if !terms.is_empty() {
            writeln!(f, "\nSemesters:")?;
            for (term, courses) in &terms {
                writeln!(f, "  {term}: {}", courses.join(", "))?;
            }
        }

        let order = prereq::sort_by_prerequisites(&transcript.course_nodes());
        if !order.is_empty() {
            writeln!(f, "\nCourse order: {}", order.join(" -> "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let transcript = Transcript::from_toml(
            r#"
name = "BS Data Science"
total_credits = 8

[[courses]]
id = "CS 180"
credits = 4
grade = "A"
status = "completed"
semester = "Fall 2024"

[[courses]]
id = "CS 182"
credits = 4
prerequisites = ["CS 180"]
semester = "Spring 2025"
"#,
        )
        .unwrap();
        let config = Config::from_defaults();

        let summary = Summary::new(&transcript, &config).to_string();
        assert!(summary.contains("Summary for BS Data Science"));
        assert!(summary.contains("GPA: 4.00"));
        assert!(summary.contains("Credits: 4 / 8 (50%)"));
        assert!(summary.contains("Standing: Junior"));
        assert!(summary.contains("1 terms"));
        assert!(summary.contains("meets minimum"));
        assert!(summary.contains("Fall 2024: CS 180"));
        assert!(summary.contains("Course order: CS 180 -> CS 182"));
    }

    #[test]
    fn test_summary_display_when_done() {
        let transcript = Transcript::from_toml(
            "total_credits = 3\n[[courses]]\nid = \"X\"\ncredits = 3\ngrade = \"D\"\nstatus = \"completed\"\n",
        )
        .unwrap();
        let config = Config::from_defaults();
        let summary = Summary::new(&transcript, &config).to_string();
        assert!(summary.contains("Summary for Transcript"));
        assert!(summary.contains("Standing: Graduate"));
        assert!(summary.contains("All required credits completed"));
        assert!(summary.contains("below minimum"));
    }
}
