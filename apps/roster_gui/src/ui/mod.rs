//! UI layer: the roster window and the form state it edits.

pub mod app;
pub mod form;

pub use app::RosterApp;
pub use form::FormView;
