use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{LayoutListViewModel, ViewMode};

pub struct LayoutListView<'a> {
    data: &'a LayoutListViewModel,
    mode: ViewMode,
}

impl<'a> LayoutListView<'a> {
    pub fn new(data: &'a LayoutListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for LayoutListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, layout) in self.data.layouts.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let marker = if layout.active { "*" } else { " " };
            if self.mode.is_styled() && layout.active {
                writeln!(
                    f,
                    "{} {} {} ({} keys)",
                    marker.green(),
                    layout.symbol,
                    layout.name.bold(),
                    layout.keys
                )?;
            } else {
                writeln!(
                    f,
                    "{} {} {} ({} keys)",
                    marker, layout.symbol, layout.name, layout.keys
                )?;
            }
            for row in &layout.rows {
                writeln!(f, "    {}", row.trim_end())?;
            }
        }
        Ok(())
    }
}
