//! Board navigation engine for the emokbd picker.
//!
//! A [`Board`] binds pages of [`Item`](emokbd_types::Item)s to the keys of a
//! [`Layout`], moves a [`Cursor`] across the key grid, ranks the corpus for
//! search queries and keeps the [`RecentStore`]. View adapters drive it one
//! event at a time and re-read its state to repaint.

mod error;
mod page;

pub mod board;
pub mod cursor;
pub mod layout;
pub mod ranker;
pub mod recent;

pub use board::{Activation, Board};
pub use cursor::{Cursor, JUMP, Resolve};
pub use error::{Error, Result};
pub use layout::{Layout, NamedLayout};
pub use page::PageKind;
pub use ranker::{match_score, search};
pub use recent::RecentStore;
