pub mod cache;
pub mod common;
pub mod item;
pub mod layout;

use std::fmt;

pub use cache::CacheRebuildViewModel;
pub use common::{CommandResultViewModel, StatusBadge, StatusLevel, Tip, ViewMode};
pub use item::{ItemListViewModel, ItemViewModel};
pub use layout::{LayoutEntryViewModel, LayoutListViewModel};

/// Bridge from a view model to the text view that renders it.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
