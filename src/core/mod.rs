//! Core academic planning logic

pub mod gpa;
pub mod models;
pub mod prereq;
pub mod progress;
pub mod skills;

/// Returns the current version of the `CoursePath` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
