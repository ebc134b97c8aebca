//! Data models for `CoursePath`

pub mod course;
pub mod semester;
pub mod transcript;

pub use course::{extract_course_code, CourseNode, GradedCourse};
pub use semester::{Season, Semester};
pub use transcript::{load_transcript, CourseRecord, CourseStatus, Transcript};
