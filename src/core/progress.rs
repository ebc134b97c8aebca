//! Degree progress, class standing and time-to-graduation estimates

use std::fmt;

/// Credits required for a standard bachelor's degree
pub const TOTAL_GRADUATION_CREDITS: u32 = 120;

/// Minimum cumulative GPA required to graduate
pub const MIN_GRADUATION_GPA: f64 = 2.0;

/// Default planned credit load per term
pub const DEFAULT_CREDITS_PER_TERM: f64 = 15.0;

/// Terms per academic year used by graduation estimates
pub const TERMS_PER_YEAR: u32 = 2;

/// Percentage of `total` credits that `completed` represents, rounded and
/// clamped to `[0, 100]`
///
/// A non-positive or non-finite `total` yields `0` rather than dividing by zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate_progress(completed: f64, total: f64) -> u32 {
    if !total.is_finite() || total <= 0.0 || !completed.is_finite() || completed <= 0.0 {
        return 0;
    }

    (completed / total * 100.0).round().min(100.0) as u32
}

/// Class year derived from degree progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AcademicStanding {
    /// Below 25% progress
    Freshman,
    /// 25% up to 50%
    Sophomore,
    /// 50% up to 75%
    Junior,
    /// 75% up to 100%
    Senior,
    /// All required credits completed
    Graduate,
}

impl AcademicStanding {
    /// Minimum progress percentage for each standing, highest first
    const THRESHOLDS: [(u32, Self); 5] = [
        (100, Self::Graduate),
        (75, Self::Senior),
        (50, Self::Junior),
        (25, Self::Sophomore),
        (0, Self::Freshman),
    ];

    /// Standing for a progress percentage
    #[must_use]
    pub fn from_progress(percent: u32) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| percent >= *min)
            .map_or(Self::Freshman, |(_, standing)| *standing)
    }

    /// Progress percentage at which this standing begins
    #[must_use]
    pub fn threshold(self) -> u32 {
        Self::THRESHOLDS
            .iter()
            .find(|(_, standing)| *standing == self)
            .map_or(0, |(min, _)| *min)
    }
}

impl fmt::Display for AcademicStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Freshman => "Freshman",
            Self::Sophomore => "Sophomore",
            Self::Junior => "Junior",
            Self::Senior => "Senior",
            Self::Graduate => "Graduate",
        };
        f.write_str(name)
    }
}

/// How long the remaining credits take at a fixed per-term load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraduationEstimate {
    /// Terms still needed
    pub terms: u32,
    /// Academic years still needed (two terms per year)
    pub years: u32,
}

/// Estimate terms and years needed to finish `remaining` credits
///
/// Returns `None` when `credits_per_term` is not a positive number. Nothing
/// remaining means zero terms.
#[must_use]
pub fn estimate_time_to_graduation(remaining: f64, credits_per_term: f64) -> Option<GraduationEstimate> {
    if !credits_per_term.is_finite() || credits_per_term <= 0.0 {
        return None;
    }
    if !remaining.is_finite() || remaining <= 0.0 {
        return Some(GraduationEstimate { terms: 0, years: 0 });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let terms = (remaining / credits_per_term).ceil().min(f64::from(u32::MAX)) as u32;
    let years = terms.div_ceil(TERMS_PER_YEAR);

    Some(GraduationEstimate { terms, years })
}
