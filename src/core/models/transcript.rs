//! Transcript documents: a student's courses, grades and skills
//!
//! Transcripts are TOML files:
//!
//! ```toml
//! name = "BS Computer Science"
//! total_credits = 120
//! skills = ["Python", "SQL"]
//!
//! [[courses]]
//! id = "CS 180"
//! title = "Problem Solving and Object-Oriented Programming"
//! credits = 4
//! grade = "A-"
//! status = "completed"
//! semester = "Fall 2024"
//!
//! [[courses]]
//! id = "CS 182"
//! credits = 3
//! prerequisites = ["CS 180"]
//! ```

use super::course::{extract_course_code, CourseNode, GradedCourse};
use super::semester::Semester;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Grades that close out a course without earning its credits
const NO_CREDIT_GRADES: [&str; 3] = ["F", "W", "I"];

/// Where a course stands in the student's path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    /// Planned for a future term
    #[default]
    Planned,
    /// Currently in progress
    Enrolled,
    /// Finished
    Completed,
    /// Dropped before completion
    Dropped,
}

/// One course entry of a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course id (e.g., "CS 180")
    pub id: String,

    /// Course title
    #[serde(default)]
    pub title: Option<String>,

    /// Credit hours
    #[serde(default)]
    pub credits: u32,

    /// Ids of prerequisite courses
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Letter grade, once one has been recorded
    #[serde(default)]
    pub grade: Option<String>,

    /// Completion status
    #[serde(default)]
    pub status: CourseStatus,

    /// Term the course was or will be taken in (e.g., "Fall 2024")
    #[serde(default)]
    pub semester: Option<String>,
}

impl CourseRecord {
    /// Whether this course counts toward completed credits
    ///
    /// A completed course earns its credits unless its grade is F, W or I.
    #[must_use]
    pub fn earns_credit(&self) -> bool {
        self.status == CourseStatus::Completed
            && self
                .grade
                .as_deref()
                .map_or(true, |grade| !NO_CREDIT_GRADES.contains(&grade.trim()))
    }
}

/// A student's academic path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Display name (student, program or plan)
    #[serde(default)]
    pub name: String,

    /// Credits this program requires; falls back to configuration when absent
    #[serde(default)]
    pub total_credits: Option<u32>,

    /// Skills the student claims
    #[serde(default)]
    pub skills: Vec<String>,

    /// Course entries
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

impl Transcript {
    /// Parse and validate a transcript from TOML
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed, a course has an empty id, or
    /// a semester name cannot be parsed.
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let transcript: Self = toml::from_str(toml_str)?;
        transcript.validate()?;
        Ok(transcript)
    }

    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for (idx, course) in self.courses.iter().enumerate() {
            if course.id.trim().is_empty() {
                return Err(format!("Course entry #{} has an empty id", idx + 1));
            }
            if !seen.insert(course.id.as_str()) {
                crate::warn!("Duplicate course id '{}' in transcript; first entry wins", course.id);
            }
            if let Some(semester) = &course.semester {
                semester
                    .parse::<Semester>()
                    .map_err(|e| format!("Course '{}': {e}", course.id))?;
            }
        }
        Ok(())
    }

    /// Completed courses that carry a grade, ready for GPA calculation
    #[must_use]
    pub fn graded_courses(&self) -> Vec<GradedCourse> {
        self.courses
            .iter()
            .filter(|c| c.status == CourseStatus::Completed)
            .filter_map(|c| {
                c.grade
                    .as_ref()
                    .map(|grade| GradedCourse::new(grade.trim(), c.credits))
            })
            .collect()
    }

    /// Sum of credits earned by completed courses, saturating at `u32::MAX`
    #[must_use]
    pub fn completed_credits(&self) -> u32 {
        self.courses
            .iter()
            .filter(|c| c.earns_credit())
            .fold(0u32, |acc, c| acc.saturating_add(c.credits))
    }

    /// Credits still needed to reach `total`
    #[must_use]
    pub fn remaining_credits(&self, total: u32) -> u32 {
        total.saturating_sub(self.completed_credits())
    }

    /// Credits this transcript requires, or `default` when it does not say
    #[must_use]
    pub fn required_credits(&self, default: u32) -> u32 {
        self.total_credits.unwrap_or(default)
    }

    /// The prerequisite graph of all course entries, in file order
    ///
    /// Ids and prerequisite references are normalized with
    /// [`extract_course_code`], so `"CS180"` and `"CS 180"` name the same
    /// course.
    #[must_use]
    pub fn course_nodes(&self) -> Vec<CourseNode> {
        self.courses
            .iter()
            .map(|c| {
                CourseNode::with_prerequisites(
                    extract_course_code(&c.id),
                    c.prerequisites.iter().map(|p| extract_course_code(p)),
                )
            })
            .collect()
    }

    /// Course ids grouped by semester, in chronological order
    ///
    /// Courses without a semester (or dropped ones) are left out.
    #[must_use]
    pub fn semesters(&self) -> Vec<(Semester, Vec<&str>)> {
        let mut by_term: BTreeMap<Semester, Vec<&str>> = BTreeMap::new();
        for course in &self.courses {
            if course.status == CourseStatus::Dropped {
                continue;
            }
            let Some(term) = course.semester.as_deref().and_then(|s| s.parse::<Semester>().ok()) else {
                continue;
            };
            by_term.entry(term).or_default().push(course.id.as_str());
        }
        by_term.into_iter().collect()
    }
}

/// Load a transcript TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or fails [`Transcript::from_toml`].
pub fn load_transcript<P: AsRef<Path>>(path: P) -> Result<Transcript, Box<dyn Error>> {
    let content = fs::read_to_string(path.as_ref())?;
    let transcript = Transcript::from_toml(&content)?;
    crate::debug!(
        "Loaded transcript '{}' with {} courses from {}",
        transcript.name,
        transcript.courses.len(),
        path.as_ref().display()
    );
    Ok(transcript)
}
