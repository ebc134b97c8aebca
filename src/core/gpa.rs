//! Grade point average

use crate::core::models::GradedCourse;

/// Grade points for a letter grade code
///
/// Codes are matched exactly after trimming whitespace. W (withdrawal) and
/// I (incomplete) are worth 0.0 points like F. Unknown codes return `None`.
#[must_use]
pub fn grade_points(code: &str) -> Option<f64> {
    let points = match code.trim() {
        "A+" | "A" => 4.0,
        "A-" => 3.7,
        "B+" => 3.3,
        "B" => 3.0,
        "B-" => 2.7,
        "C+" => 2.3,
        "C" => 2.0,
        "C-" => 1.7,
        "D+" => 1.3,
        "D" => 1.0,
        "D-" => 0.7,
        "F" | "W" | "I" => 0.0,
        _ => return None,
    };
    Some(points)
}

/// Credit-weighted mean of grade points, in `[0.0, 4.0]`
///
/// Courses with an unknown grade code are left out of both the points and
/// the credits. Returns `0.0` when no course carries a known grade with
/// non-zero credits.
#[must_use]
pub fn calculate_gpa(courses: &[GradedCourse]) -> f64 {
    let mut total_points = 0.0;
    let mut total_credits = 0u64;

    for course in courses {
        let Some(points) = grade_points(&course.grade) else {
            crate::debug!("Skipping unknown grade '{}' in GPA calculation", course.grade);
            continue;
        };
        total_points += points * f64::from(course.credits);
        total_credits += u64::from(course.credits);
    }

    if total_credits == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let gpa = total_points / total_credits as f64;
    gpa.clamp(0.0, 4.0)
}
