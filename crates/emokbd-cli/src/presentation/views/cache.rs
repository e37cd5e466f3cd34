use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{CacheRebuildViewModel, ViewMode};

pub struct CacheRebuildView<'a> {
    data: &'a CacheRebuildViewModel,
    mode: ViewMode,
}

impl<'a> CacheRebuildView<'a> {
    pub fn new(data: &'a CacheRebuildViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for CacheRebuildView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = [
            ("Items", self.data.items.to_string()),
            ("Variants", self.data.variants.to_string()),
            ("Groups", self.data.groups.to_string()),
            ("Cache", self.data.cache_dir.clone()),
        ];
        for (label, value) in rows {
            if self.mode.is_styled() {
                writeln!(f, "{:<10}{}", format!("{}:", label).bold(), value)?;
            } else {
                writeln!(f, "{:<10}{}", format!("{}:", label), value)?;
            }
        }
        Ok(())
    }
}
