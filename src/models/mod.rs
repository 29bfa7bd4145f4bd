pub mod course;
pub mod loaders;
pub mod progress;

pub use course::{CourseCatalog, CourseEntry, ExamQuestion, ResolvedCourse};
pub use loaders::load_catalog;
pub use progress::CourseProgress;
