use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// Items shown by `search` and `recent`.
#[derive(Debug, Serialize)]
pub struct ItemListViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Matches before the limit was applied.
    pub total: usize,
    pub items: Vec<ItemViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ItemViewModel {
    pub symbol: String,
    pub code: String,
    pub label: String,
    pub category: String,
    pub subcategory: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    pub favorite: bool,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ItemListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::item::ItemListView;
        Box::new(ItemListView::new(self, mode))
    }
}

impl fmt::Display for ItemListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
