//! Controller layer: UI events and their dispatch onto the coordinator.

pub mod events;
pub mod orchestration;
