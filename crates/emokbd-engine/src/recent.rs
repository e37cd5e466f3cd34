//! Bounded, persisted list of recently chosen items.
//!
//! Every use adds [`USE_INCREMENT`] to the chosen entry's weight, saturating
//! at [`FAVORITE_WEIGHT`] (the entry becomes a favorite), while every other
//! non-favorite entry decays by one. The list is kept sorted by weight and
//! capped at [`RECENT_CAPACITY`]. Persistence is best effort: failures are
//! logged and the in-memory list stays authoritative.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use emokbd_types::{Item, Mark};
use tracing::{debug, error};

use crate::Result;

pub const RECENT_CAPACITY: usize = 100;
pub const FAVORITE_WEIGHT: u32 = 100;
pub const USE_INCREMENT: u32 = 10;

const FIELD_COUNT: usize = 7;

#[derive(Debug, Clone, Default)]
pub struct RecentStore {
    entries: Vec<Item>,
    path: Option<PathBuf>,
}

fn set_weight(item: &mut Item, weight: u32) {
    item.usage_weight = weight.min(FAVORITE_WEIGHT);
    item.mark = Mark::for_weight(item.usage_weight, FAVORITE_WEIGHT);
}

fn clean(field: &str) -> String {
    field.replace(['\n', '\r'], " ")
}

/// Escape `;` and `\` in every field before the last one.
fn escape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            ';' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Split a record into its fields. The tags field is last and taken as is,
/// so it may contain `;`.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut field = String::new();
    let mut chars = line.char_indices();
    while let Some((index, c)) = chars.next() {
        if fields.len() == FIELD_COUNT - 1 {
            fields.push(line[index..].to_string());
            return fields;
        }
        match c {
            '\\' => field.push(chars.next().map_or('\\', |(_, next)| next)),
            ';' => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

impl RecentStore {
    /// A store that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load from `path`. A missing file is an empty list; an unreadable one
    /// is logged and also treated as empty. Later saves go to `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => Self::parse(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                error!(path = %path.display(), error = %err, "restoring recent list");
                Vec::new()
            }
        };
        debug!(path = %path.display(), entries = entries.len(), "recent list loaded");
        Self {
            entries,
            path: Some(path),
        }
    }

    /// Parse recency records (`weight;symbol;code;label;category;subcategory;tags`).
    ///
    /// Malformed lines are logged and skipped. When a symbol appears more
    /// than once the last record wins. The result is sorted by weight,
    /// heaviest first, and capped.
    pub fn parse(text: &str) -> Vec<Item> {
        let mut entries: Vec<Item> = Vec::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_record(line);
            if fields.len() != FIELD_COUNT {
                error!(line = number + 1, "recent list: expected {} fields", FIELD_COUNT);
                continue;
            }
            let Ok(weight) = fields[0].trim().parse::<u32>() else {
                error!(line = number + 1, weight = %fields[0], "recent list: bad weight");
                continue;
            };
            if fields[1].is_empty() {
                error!(line = number + 1, "recent list: empty symbol");
                continue;
            }

            let mut item = Item::new(fields[1].as_str())
                .with_code(fields[2].as_str())
                .with_label(fields[3].as_str())
                .with_category(fields[4].as_str(), fields[5].as_str())
                .with_tags(fields[6].as_str());
            set_weight(&mut item, weight);

            match entries.iter().position(|e| e.symbol == item.symbol) {
                Some(index) => entries[index] = item,
                None => entries.push(item),
            }
        }
        entries.sort_by(|a, b| b.usage_weight.cmp(&a.usage_weight));
        entries.truncate(RECENT_CAPACITY);
        entries
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn items(&self) -> &[Item] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.symbol == symbol)
    }

    pub fn get(&self, symbol: &str) -> Option<&Item> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    /// Index of the entry for `item`, inserting it unweighted if needed.
    ///
    /// A full list first evicts its lightest non-favorite, the last one on
    /// ties. `None` when every entry is a favorite.
    fn entry_for(&mut self, item: &Item) -> Option<usize> {
        if let Some(index) = self.position(&item.symbol) {
            return Some(index);
        }
        if self.entries.len() >= RECENT_CAPACITY {
            let evict = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.usage_weight < FAVORITE_WEIGHT)
                .min_by(|(ia, a), (ib, b)| a.usage_weight.cmp(&b.usage_weight).then(ib.cmp(ia)))
                .map(|(index, _)| index)?;
            let evicted = self.entries.remove(evict);
            debug!(symbol = %evicted.symbol, "recent list full, evicted");
        }

        let mut entry = item.clone();
        entry.search_score = 0;
        // variants are not persisted, keep memory and file in step
        entry.children.clear();
        set_weight(&mut entry, 0);
        self.entries.push(entry);
        Some(self.entries.len() - 1)
    }

    /// Record a use of `item`.
    ///
    /// With `suppress_resort` the order is left alone, so an entry picked
    /// from the recent page itself does not jump away from the cursor.
    /// Returns false when the list is full of favorites and `item` is new.
    pub fn add(&mut self, item: &Item, suppress_resort: bool) -> bool {
        let Some(chosen) = self.entry_for(item) else {
            debug!(symbol = %item.symbol, "recent list holds only favorites");
            return false;
        };
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.usage_weight >= FAVORITE_WEIGHT {
                continue;
            }
            let weight = if index == chosen {
                entry.usage_weight + USE_INCREMENT
            } else {
                entry.usage_weight.saturating_sub(1)
            };
            set_weight(entry, weight);
        }
        if !suppress_resort {
            self.entries
                .sort_by(|a, b| b.usage_weight.cmp(&a.usage_weight));
        }
        debug!(symbol = %item.symbol, "recent add");
        self.save();
        true
    }

    /// Flip between favorite and unweighted. An item not yet in the list is
    /// inserted as a favorite, unless the list is full of favorites.
    /// Returns whether it is a favorite now.
    pub fn toggle_favorite(&mut self, item: &Item) -> bool {
        let Some(index) = self.entry_for(item) else {
            debug!(symbol = %item.symbol, "recent list holds only favorites");
            return false;
        };
        let entry = &mut self.entries[index];
        let weight = if entry.usage_weight >= FAVORITE_WEIGHT {
            0
        } else {
            FAVORITE_WEIGHT
        };
        set_weight(entry, weight);
        let favorite = weight == FAVORITE_WEIGHT;
        self.save();
        favorite
    }

    /// Remove the entry for `symbol`. Returns false if there was none.
    pub fn delete(&mut self, symbol: &str) -> bool {
        let Some(index) = self.position(symbol) else {
            return false;
        };
        self.entries.remove(index);
        self.save();
        true
    }

    /// Swap the entry with its neighbour in `direction` (negative is towards
    /// the front). Weights are untouched. Returns false at either end.
    pub fn reorder(&mut self, symbol: &str, direction: i32) -> bool {
        let Some(index) = self.position(symbol) else {
            return false;
        };
        let target = if direction < 0 {
            index.checked_sub(1)
        } else {
            Some(index + 1).filter(|&i| i < self.entries.len())
        };
        let Some(target) = target else {
            return false;
        };
        self.entries.swap(index, target);
        self.save();
        true
    }

    /// Serialise all entries, one record per line.
    pub fn write_to(&self, mut writer: impl Write) -> Result<()> {
        for e in &self.entries {
            writeln!(
                writer,
                "{};{};{};{};{};{};{}",
                e.usage_weight,
                escape(&e.symbol),
                escape(&e.code),
                escape(&e.label),
                escape(&e.category),
                escape(&e.subcategory),
                clean(&e.tags),
            )?;
        }
        Ok(())
    }

    pub fn try_save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        fs::write(path, buffer)?;
        Ok(())
    }

    /// Persist, logging instead of failing.
    pub fn save(&self) {
        if let Err(err) = self.try_save() {
            error!(error = %err, "saving recent list");
        }
    }
}
