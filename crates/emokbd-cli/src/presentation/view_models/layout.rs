use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct LayoutListViewModel {
    pub active: String,
    pub layouts: Vec<LayoutEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct LayoutEntryViewModel {
    pub name: String,
    pub symbol: String,
    pub keys: usize,
    pub rows: Vec<String>,
    pub active: bool,
}

impl CreateView for LayoutListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::layout::LayoutListView;
        Box::new(LayoutListView::new(self, mode))
    }
}

impl fmt::Display for LayoutListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
