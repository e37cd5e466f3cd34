//! Corpus ingestion for the emokbd picker.
//!
//! Builds the flat item list and the top-level groups the board runs on,
//! from local copies of the emojibase data set and `UnicodeData.txt`, and
//! keeps the result in two plain-text caches so later starts skip parsing.
//! Nothing here touches the network.

mod error;

pub mod cache;
pub mod emojibase;
pub mod grouping;
pub mod unicode_data;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use emokbd_types::Item;
use tracing::{info, warn};

pub use error::{Error, Result};

/// Location of the source files a corpus is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    /// Directory holding `data.raw.json` and `messages.raw.json`.
    pub emojibase_dir: PathBuf,
    pub unicode_data: PathBuf,
}

impl Sources {
    pub fn missing(&self) -> Vec<PathBuf> {
        emojibase::source_files(&self.emojibase_dir)
            .into_iter()
            .chain(std::iter::once(self.unicode_data.clone()))
            .filter(|p| !p.exists())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Every pickable item, variants nested under their base item.
    pub items: Vec<Item>,
    /// Top-level groups in display order.
    pub groups: Vec<Item>,
}

impl Corpus {
    /// Parse the source files and group the result.
    pub fn build(sources: &Sources) -> Result<Self> {
        let missing = sources.missing();
        if !missing.is_empty() {
            return Err(Error::MissingSources(missing));
        }

        let emojibase = emojibase::read_emojibase(&sources.emojibase_dir)?;
        let mut items = emojibase.items;
        let symbols = unicode_data::read_unicode_data(&sources.unicode_data)?;

        let known: HashSet<String> = items.iter().map(|i| i.code.clone()).collect();
        let (total, before) = (symbols.len(), items.len());
        items.extend(symbols.into_iter().filter(|s| !known.contains(&s.code)));
        info!(
            duplicates = total - (items.len() - before),
            items = items.len(),
            "symbols merged"
        );

        // groups are matched on keys, display names come afterwards
        let assignments: Vec<usize> = items.iter().map(grouping::pattern_for).collect();
        for item in &mut items {
            emojibase.messages.localize(item);
        }
        let groups = grouping::build_groups(&items, &assignments);
        info!(groups = groups.len(), "corpus built");

        Ok(Self { items, groups })
    }

    /// Load from the caches in `cache_dir`, building and writing them first
    /// when they are missing or unreadable.
    pub fn load_or_build(cache_dir: &Path, sources: &Sources) -> Result<Self> {
        match cache::read_cache(cache_dir) {
            Ok(Some(corpus)) => return Ok(corpus),
            Ok(None) => info!(dir = %cache_dir.display(), "no corpus cache, building"),
            Err(err) => warn!(error = %err, "corpus cache unreadable, rebuilding"),
        }
        Self::rebuild(cache_dir, sources)
    }

    /// Build from sources and overwrite the caches.
    pub fn rebuild(cache_dir: &Path, sources: &Sources) -> Result<Self> {
        let corpus = Self::build(sources)?;
        cache::write_cache(cache_dir, &corpus)?;
        Ok(corpus)
    }

    pub fn variant_count(&self) -> usize {
        self.items.iter().map(|i| i.children.len()).sum()
    }
}
