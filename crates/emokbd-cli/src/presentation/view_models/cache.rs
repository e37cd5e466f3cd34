use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct CacheRebuildViewModel {
    pub items: usize,
    pub variants: usize,
    pub groups: usize,
    pub cache_dir: String,
}

impl CreateView for CacheRebuildViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::cache::CacheRebuildView;
        Box::new(CacheRebuildView::new(self, mode))
    }
}

impl fmt::Display for CacheRebuildViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
