//! `progress` subcommand

use course_path::config::Config;
use course_path::core::progress::{
    calculate_progress, estimate_time_to_graduation, AcademicStanding,
};
use course_path::debug;

/// Print progress, standing and a graduation estimate for a credit count
///
/// `total` falls back to the configured degree total.
///
/// # Errors
/// Returns a message when a credit count is negative or not a number.
pub fn run(completed: f64, total: Option<f64>, config: &Config) -> Result<(), String> {
    let total = total.unwrap_or_else(|| f64::from(config.academics.total_credits));
    for (label, value) in [("completed", completed), ("total", total)] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("✗ Invalid {label} credits: {value}"));
        }
    }

    let percent = calculate_progress(completed, total);
    let standing = AcademicStanding::from_progress(percent);
    debug!("Progress {completed}/{total} -> {percent}% ({standing})");

    println!("Progress: {percent}% ({completed} / {total} credits)");
    println!("Standing: {standing}");

    let remaining = (total - completed).max(0.0);
    if let Some(estimate) =
        estimate_time_to_graduation(remaining, config.academics.credits_per_term)
    {
        println!(
            "Remaining: {remaining} credits, about {} terms (~{} years)",
            estimate.terms, estimate.years
        );
    }
    Ok(())
}
