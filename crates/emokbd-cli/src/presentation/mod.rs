//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contracts, one per command result.
//! * `presenters/`: engine and corpus types to view models.
//! * `views/`: text rendering of a view model, plain or styled.
//! * `renderers/`: JSON or text output of a `CommandResultViewModel`.
//! * `tui/`: the interactive picker, which talks to the `Board` directly.

pub mod presenters;
pub mod renderers;
pub mod symbols;
pub mod tui;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, StatusBadge, StatusLevel, Tip, ViewMode};
