pub mod domain;
pub mod error;

pub use domain::{AccessorIndex, Course, Student};
pub use error::RosterError;
