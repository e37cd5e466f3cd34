//! Reader for the emojibase raw data set (`data.raw.json`, `messages.raw.json`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use emokbd_types::{GroupBuilder, Item, Mark};
use serde::Deserialize;
use tracing::info;

use crate::Result;
use crate::unicode_data::is_excluded;

pub const DATA_FILE: &str = "data.raw.json";
pub const MESSAGES_FILE: &str = "messages.raw.json";

#[derive(Debug, Deserialize)]
struct RawEmoji {
    emoji: String,
    hexcode: String,
    label: String,
    #[serde(default)]
    group: Option<u32>,
    #[serde(default)]
    subgroup: Option<u32>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    skins: Vec<RawSkin>,
}

#[derive(Debug, Deserialize)]
struct RawSkin {
    emoji: String,
    hexcode: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct RawMessages {
    groups: Vec<RawMessage>,
    subgroups: Vec<RawMessage>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    key: String,
    message: String,
    order: u32,
}

/// Display names for group and subgroup keys.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    pub groups: HashMap<String, String>,
    pub subgroups: HashMap<String, String>,
}

impl Messages {
    pub fn category(&self, key: &str) -> String {
        self.groups.get(key).cloned().unwrap_or_else(|| key.to_string())
    }

    pub fn subcategory(&self, key: &str) -> String {
        self.subgroups.get(key).cloned().unwrap_or_else(|| key.to_string())
    }

    /// Replace classification keys with their display names, variants included.
    pub fn localize(&self, item: &mut Item) {
        item.category = self.category(&item.category);
        item.subcategory = self.subcategory(&item.subcategory);
        for child in &mut item.children {
            self.localize(child);
        }
    }
}

pub struct Emojibase {
    /// Items classified by group/subgroup key, skin variants as children.
    pub items: Vec<Item>,
    pub messages: Messages,
}

pub fn source_files(dir: &Path) -> [PathBuf; 2] {
    [dir.join(DATA_FILE), dir.join(MESSAGES_FILE)]
}

pub fn read_emojibase(dir: &Path) -> Result<Emojibase> {
    let messages = std::fs::read_to_string(dir.join(MESSAGES_FILE))?;
    let data = std::fs::read_to_string(dir.join(DATA_FILE))?;
    let emojibase = parse_emojibase(&data, &messages)?;

    let variants: usize = emojibase.items.iter().map(|i| i.children.len()).sum();
    info!(
        dir = %dir.display(),
        emojis = emojibase.items.len(),
        variants,
        "emojibase loaded"
    );
    Ok(emojibase)
}

pub fn parse_emojibase(data: &str, messages: &str) -> Result<Emojibase> {
    let raw_messages: RawMessages = serde_json::from_str(messages)?;
    // data refers to groups by order, the rest of the pipeline by key
    let group_keys: HashMap<u32, String> = raw_messages
        .groups
        .iter()
        .map(|g| (g.order, g.key.clone()))
        .collect();
    let subgroup_keys: HashMap<u32, String> = raw_messages
        .subgroups
        .iter()
        .map(|g| (g.order, g.key.clone()))
        .collect();
    let messages = Messages {
        groups: raw_messages
            .groups
            .into_iter()
            .map(|g| (g.key, g.message))
            .collect(),
        subgroups: raw_messages
            .subgroups
            .into_iter()
            .map(|g| (g.key, g.message))
            .collect(),
    };

    let raw: Vec<RawEmoji> = serde_json::from_str(data)?;
    let key = |keys: &HashMap<u32, String>, order: Option<u32>| {
        order
            .and_then(|o| keys.get(&o).cloned())
            .unwrap_or_default()
    };

    let items = raw
        .into_iter()
        .filter(|e| {
            // sequences are always kept, single code points may be excluded
            e.hexcode.contains('-')
                || u32::from_str_radix(&e.hexcode, 16).is_ok_and(|cp| !is_excluded(cp))
        })
        .map(|e| {
            let category = key(&group_keys, e.group);
            let subcategory = key(&subgroup_keys, e.subgroup);
            let tags = e.tags.join(", ");
            let base = Item::new(e.emoji)
                .with_code(e.hexcode)
                .with_category(category.as_str(), subcategory.as_str())
                .with_label(e.label)
                .with_tags(tags.as_str());
            if e.skins.is_empty() {
                return base;
            }
            let mut family = GroupBuilder::from_item(base).mark(Mark::VARIANTS);
            family.extend(e.skins.into_iter().map(|skin| {
                Item::new(skin.emoji)
                    .with_code(skin.hexcode)
                    .with_category(category.as_str(), subcategory.as_str())
                    .with_label(skin.label)
                    .with_tags(tags.as_str())
            }));
            family.finish()
        })
        .collect();

    Ok(Emojibase { items, messages })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: &str = r#"{
        "groups": [
            {"key": "smileys-emotion", "message": "smileys & emotion", "order": 0},
            {"key": "people-body", "message": "people & body", "order": 1}
        ],
        "subgroups": [
            {"key": "face-smiling", "message": "smiling faces", "order": 0},
            {"key": "hand-fingers-closed", "message": "hand: closed", "order": 1}
        ]
    }"#;

    const DATA: &str = r#"[
        {"label": "grinning face", "hexcode": "1F600", "tags": ["face", "grin"],
         "emoji": "😀", "text": "", "type": 1, "order": 1, "group": 0, "subgroup": 0},
        {"label": "thumbs up", "hexcode": "1F44D", "tags": ["+1", "hand"],
         "emoji": "👍", "type": 1, "group": 1, "subgroup": 1,
         "skins": [
            {"label": "thumbs up: light skin tone", "hexcode": "1F44D-1F3FB", "emoji": "👍🏻", "tone": 1},
            {"label": "thumbs up: dark skin tone", "hexcode": "1F44D-1F3FF", "emoji": "👍🏿", "tone": 5}
         ]},
        {"label": "light skin tone", "hexcode": "1F3FB", "emoji": "🏻", "group": 2},
        {"label": "flag: Germany", "hexcode": "1F1E9-1F1EA", "emoji": "🇩🇪"}
    ]"#;

    #[test]
    fn test_parse_items_and_messages() {
        let emojibase = parse_emojibase(DATA, MESSAGES).unwrap();
        let symbols: Vec<&str> = emojibase.items.iter().map(|i| i.symbol.as_str()).collect();
        // the skin tone modifier is excluded, the flag sequence is kept
        assert_eq!(symbols, ["😀", "👍", "🇩🇪"]);

        let grin = &emojibase.items[0];
        assert_eq!(grin.category, "smileys-emotion");
        assert_eq!(grin.subcategory, "face-smiling");
        assert_eq!(grin.tags, "face, grin");
        assert_eq!(emojibase.messages.category("smileys-emotion"), "smileys & emotion");
        assert_eq!(emojibase.messages.category("unknown"), "unknown");

        let flag = &emojibase.items[2];
        assert_eq!(flag.category, "");
    }

    #[test]
    fn test_skins_become_variants() {
        let emojibase = parse_emojibase(DATA, MESSAGES).unwrap();
        let thumbs = &emojibase.items[1];
        assert_eq!(thumbs.mark, Mark::VARIANTS);
        assert!(thumbs.has_code());
        assert_eq!(thumbs.children.len(), 2);
        assert_eq!(thumbs.children[1].code, "1F44D-1F3FF");
        assert_eq!(thumbs.children[1].subcategory, "hand-fingers-closed");
        assert_eq!(thumbs.subcategory, "hand-fingers-closed");
    }

    #[test]
    fn test_localize_reaches_variants() {
        let emojibase = parse_emojibase(DATA, MESSAGES).unwrap();
        let mut thumbs = emojibase.items[1].clone();
        emojibase.messages.localize(&mut thumbs);
        assert_eq!(thumbs.category, "people & body");
        assert_eq!(thumbs.children[0].subcategory, "hand: closed");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            parse_emojibase("[{", MESSAGES),
            Err(crate::Error::Json(_))
        ));
    }
}
