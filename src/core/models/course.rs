//! Course models

use serde::{Deserialize, Serialize};

/// A course as a node of the prerequisite graph
///
/// Edges point from the course to each of its prerequisites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseNode {
    /// Unique course id (e.g., "CS 180")
    pub id: String,

    /// Ids of courses that must be completed first, in listed order
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl CourseNode {
    /// Create a node with no prerequisites
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Create a node with the given prerequisite ids
    #[must_use]
    pub fn with_prerequisites<I, S>(id: impl Into<String>, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a prerequisite by course id
    pub fn add_prerequisite(&mut self, prereq_id: String) {
        if !self.prerequisites.contains(&prereq_id) {
            self.prerequisites.push(prereq_id);
        }
    }
}

/// A letter grade earned over some credit hours, as fed to the GPA calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedCourse {
    /// Letter grade code (e.g., "A-", "B+", "W")
    pub grade: String,

    /// Credit hours
    pub credits: u32,
}

impl GradedCourse {
    /// Create a graded course
    #[must_use]
    pub fn new(grade: impl Into<String>, credits: u32) -> Self {
        Self {
            grade: grade.into(),
            credits,
        }
    }
}

/// Normalize the leading course code of a free-form course string
///
/// `"CS180 Problem Solving"` becomes `"CS 180"`: two to four upper-case
/// letters, optional whitespace, then the first three or four digits. Strings
/// that do not start with a code are returned unchanged.
#[must_use]
pub fn extract_course_code(course: &str) -> String {
    let prefix_len = course
        .chars()
        .take_while(char::is_ascii_uppercase)
        .count();
    if !(2..=4).contains(&prefix_len) {
        return course.to_string();
    }

    let (prefix, rest) = course.split_at(prefix_len);
    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .take(4)
        .collect();

    if digits.len() < 3 {
        return course.to_string();
    }

    format!("{prefix} {digits}")
}
