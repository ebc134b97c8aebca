//! Matching a user's skills against a job's required skills

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set of skill names compared case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    normalized: HashSet<String>,
}

impl SkillSet {
    /// Create an empty skill set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill. Returns `false` if an equal skill (ignoring case) was present.
    pub fn insert(&mut self, skill: &str) -> bool {
        self.normalized.insert(normalize(skill))
    }

    /// Whether `skill` is in the set, ignoring case
    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.normalized.contains(&normalize(skill))
    }

    /// Number of distinct skills
    #[must_use]
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    /// Whether the set holds no skills
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            normalized: iter.into_iter().map(|s| normalize(s.as_ref())).collect(),
        }
    }
}

fn normalize(skill: &str) -> String {
    skill.to_lowercase()
}

/// Outcome of comparing a user's skills with a job's requirements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsMatch {
    /// Required skills the user has, as spelled in the requirement list
    pub matched_skills: Vec<String>,
    /// Required skills the user lacks, as spelled in the requirement list
    pub missing_skills: Vec<String>,
    /// `round(100 * matched / required)`, `0` when nothing is required
    pub match_percentage: u32,
}

/// Compare `user_skills` with `required_skills`
///
/// Matching is exact equality of lower-cased names; there is no substring or
/// fuzzy matching. Both output lists keep the order (and duplicates) of
/// `required_skills`.
#[must_use]
pub fn calculate_skills_match<U, R>(user_skills: &[U], required_skills: &[R]) -> SkillsMatch
where
    U: AsRef<str>,
    R: AsRef<str>,
{
    let user: SkillSet = user_skills.iter().collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .map(|skill| skill.as_ref().to_string())
        .partition(|skill| user.contains(skill));

    let match_percentage = percentage(matched_skills.len(), required_skills.len());

    SkillsMatch {
        matched_skills,
        missing_skills,
        match_percentage,
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}
