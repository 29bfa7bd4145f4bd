pub mod exam_script;
pub mod fragments;
pub mod progress_store;
pub mod warn_writer;

pub use exam_script::render_course_script;
pub use progress_store::ProgressStore;
pub use warn_writer::WarnWriter;
