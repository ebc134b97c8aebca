//! Shared library for `CoursePath`
//! Academic planning utilities used by the `coursepath` CLI: GPA, degree
//! progress, prerequisite ordering and skills matching.

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
