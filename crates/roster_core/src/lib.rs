//! Course roster coordination: per-course accessors, the coordinator that
//! resolves course-name queries, and the view capability it drives.

pub mod accessor;
pub mod bootstrap;
pub mod config;
pub mod coordinator;
pub mod view;

#[cfg(test)]
#[path = "tests/log_capture.rs"]
mod log_capture;

pub use accessor::CourseAccessor;
pub use coordinator::{format_grade, roster_line, CellState, Coordinator, CoordinatorCell};
pub use shared::{AccessorIndex, Course, RosterError, Student};
pub use view::{BufferedView, RosterView};
