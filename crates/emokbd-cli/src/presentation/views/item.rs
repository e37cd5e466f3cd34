use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::symbols;
use crate::presentation::view_models::{ItemListViewModel, ItemViewModel, ViewMode};

// --------------------------------------------------------
// Item List View
// --------------------------------------------------------

pub struct ItemListView<'a> {
    data: &'a ItemListViewModel,
    mode: ViewMode,
}

impl<'a> ItemListView<'a> {
    pub fn new(data: &'a ItemListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn write_item(&self, f: &mut fmt::Formatter, item: &ItemViewModel) -> fmt::Result {
        let (text, special) = match symbols::special_name(&item.code) {
            Some(name) => (name, true),
            None => (item.symbol.as_str(), false),
        };
        let cell = symbols::pad(text, 4);
        let classification = if item.subcategory.is_empty() {
            item.category.clone()
        } else {
            format!("{} > {}", item.category, item.subcategory)
        };

        if self.mode.is_styled() {
            if special {
                write!(f, "{}", cell.dimmed())?;
            } else {
                write!(f, "{}", cell)?;
            }
            write!(f, "{:<12} {}", item.code.cyan(), item.label.bold())?;
            if !classification.is_empty() {
                write!(f, "  {}", classification.dimmed())?;
            }
        } else {
            write!(f, "{}{:<12} {}", cell, item.code, item.label)?;
            if !classification.is_empty() {
                write!(f, "  {}", classification)?;
            }
        }

        if item.favorite {
            write!(f, "  ⭐")?;
        } else if let Some(weight) = item.weight.filter(|w| *w > 0) {
            write!(f, "  ({})", weight)?;
        }
        if !item.variants.is_empty() {
            write!(f, "  +{} variants", item.variants.len())?;
        }
        writeln!(f)
    }
}

impl<'a> fmt::Display for ItemListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.items.is_empty() {
            return Ok(());
        }
        for item in &self.data.items {
            self.write_item(f, item)?;
        }
        if self.data.total > self.data.items.len() {
            writeln!(f, "... {} more", self.data.total - self.data.items.len())?;
        }
        Ok(())
    }
}
