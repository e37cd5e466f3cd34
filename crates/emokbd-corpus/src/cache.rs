//! Plain-text corpus caches.
//!
//! Items cache, one record per line, variants indented by a tab below their
//! base item:
//!
//! ```text
//! 👍;1F44D;thumbs up;people & body;hand: closed;+1, hand
//! 	👍🏻;1F44D-1F3FB;thumbs up: light skin tone;people & body;hand: closed;+1, hand
//! ```
//!
//! Groups cache, one group per line with the codes of its members:
//!
//! ```text
//! 👍️;1F44D,1F44E,1F44F
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use emokbd_types::{GroupBuilder, Item, Mark};
use tracing::{info, warn};

use crate::grouping::finish_group;
use crate::{Corpus, Error, Result};

pub const ITEMS_CACHE: &str = "emokbd-cache-items.txt";
pub const GROUPS_CACHE: &str = "emokbd-cache-groups.txt";

const ITEM_FIELDS: usize = 6;

pub fn cache_files(cache_dir: &Path) -> (PathBuf, PathBuf) {
    (cache_dir.join(ITEMS_CACHE), cache_dir.join(GROUPS_CACHE))
}

fn clean(field: &str) -> String {
    field.replace(['\n', '\r', '\t'], " ")
}

fn item_record(out: &mut String, item: &Item) {
    let _ = writeln!(
        out,
        "{};{};{};{};{};{}",
        clean(&item.symbol),
        item.code,
        clean(&item.label),
        clean(&item.category),
        clean(&item.subcategory),
        clean(&item.tags),
    );
}

pub fn render_items(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        item_record(&mut out, item);
        for variant in &item.children {
            out.push('\t');
            item_record(&mut out, variant);
        }
    }
    out
}

pub fn render_groups(groups: &[Item]) -> String {
    let mut out = String::new();
    for group in groups {
        let codes: Vec<&str> = group.children.iter().map(|c| c.code.as_str()).collect();
        let _ = writeln!(out, "{};{}", group.symbol, codes.join(","));
    }
    out
}

pub fn write_cache(cache_dir: &Path, corpus: &Corpus) -> Result<()> {
    std::fs::create_dir_all(cache_dir)?;
    let (items_path, groups_path) = cache_files(cache_dir);
    std::fs::write(&items_path, render_items(&corpus.items))?;
    std::fs::write(&groups_path, render_groups(&corpus.groups))?;
    info!(
        items = %items_path.display(),
        groups = %groups_path.display(),
        "caches written"
    );
    Ok(())
}

fn parse_item(file: &Path, line: usize, record: &str) -> Result<Item> {
    let fields: Vec<&str> = record.splitn(ITEM_FIELDS, ';').collect();
    if fields.len() != ITEM_FIELDS || fields[0].is_empty() {
        return Err(Error::Cache {
            file: file.to_path_buf(),
            line,
            reason: format!("expected {} fields", ITEM_FIELDS),
        });
    }
    Ok(Item::new(fields[0])
        .with_code(fields[1])
        .with_label(fields[2])
        .with_category(fields[3], fields[4])
        .with_tags(fields[5]))
}

fn finish_item(builder: GroupBuilder) -> Item {
    let mut item = builder.finish();
    if item.is_group() {
        item.mark = Mark::VARIANTS.to_string();
    }
    item
}

pub fn parse_items(file: &Path, text: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    let mut pending: Option<GroupBuilder> = None;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if let Some(variant) = line.strip_prefix('\t') {
            let variant = parse_item(file, index + 1, variant)?;
            match pending.as_mut() {
                Some(base) => {
                    base.push(variant);
                }
                None => {
                    return Err(Error::Cache {
                        file: file.to_path_buf(),
                        line: index + 1,
                        reason: "variant without base item".to_string(),
                    });
                }
            }
            continue;
        }
        let item = parse_item(file, index + 1, line)?;
        if let Some(previous) = pending.replace(GroupBuilder::from_item(item)) {
            items.push(finish_item(previous));
        }
    }
    if let Some(last) = pending {
        items.push(finish_item(last));
    }
    Ok(items)
}

/// Rebuild group pages from the groups cache and the parsed items.
pub fn parse_groups(file: &Path, text: &str, items: &[Item]) -> Result<Vec<Item>> {
    let by_code: HashMap<&str, &Item> = items.iter().map(|i| (i.code.as_str(), i)).collect();
    let mut groups = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let Some((symbol, codes)) = line.split_once(';') else {
            return Err(Error::Cache {
                file: file.to_path_buf(),
                line: index + 1,
                reason: "expected symbol;codes".to_string(),
            });
        };
        let mut builder = GroupBuilder::new(symbol);
        for code in codes.split(',').filter(|c| !c.is_empty()) {
            match by_code.get(code) {
                Some(item) => {
                    builder.push((*item).clone());
                }
                None => warn!(code, group = symbol, "grouped code missing from items cache"),
            }
        }
        if !builder.is_empty() {
            groups.push(finish_group(builder));
        }
    }
    Ok(groups)
}

/// Read both caches. `None` when either file is missing.
pub fn read_cache(cache_dir: &Path) -> Result<Option<Corpus>> {
    let (items_path, groups_path) = cache_files(cache_dir);
    if !items_path.exists() || !groups_path.exists() {
        return Ok(None);
    }
    let items = parse_items(&items_path, &std::fs::read_to_string(&items_path)?)?;
    let groups = parse_groups(&groups_path, &std::fs::read_to_string(&groups_path)?, &items)?;
    info!(
        items = items.len(),
        groups = groups.len(),
        dir = %cache_dir.display(),
        "corpus cache loaded"
    );
    Ok(Some(Corpus { items, groups }))
}
