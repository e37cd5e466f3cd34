//! Interactive picker.

pub mod app;
pub mod terminal;
pub mod view;

pub use app::{Focus, Outcome, PickerApp};
pub use terminal::run_picker;
