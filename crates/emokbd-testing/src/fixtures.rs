//! Fixtures for sample data generation and placement.
//!
//! The sample corpus is small but spans enough groups to exercise paging,
//! search and grouping:
//!
//! | group | members |
//! |-------|---------|
//! | 😀 | 😀 😃 😍 |
//! | 👍️ | 👍 (two skin tone variants) |
//! | 🐒 | 🐒 🐕 🐦 |
//! | ☀️ | ☃️ |
//! | 💰️ | € |
//! | ➹ | ← → |
//! | ∛ | ∑ |
//! | ␠ | no-break space |

use anyhow::Result;
use std::fs;
use std::path::Path;

pub const SAMPLE_MESSAGES: &str = r#"{
    "groups": [
        {"key": "smileys-emotion", "message": "smileys & emotion", "order": 0},
        {"key": "people-body", "message": "people & body", "order": 1},
        {"key": "animals-nature", "message": "animals & nature", "order": 3},
        {"key": "travel-places", "message": "travel & places", "order": 5}
    ],
    "subgroups": [
        {"key": "face-smiling", "message": "face smiling", "order": 0},
        {"key": "face-affection", "message": "face affection", "order": 1},
        {"key": "hand-fingers-closed", "message": "hand fingers closed", "order": 10},
        {"key": "animal-mammal", "message": "animal mammal", "order": 40},
        {"key": "animal-bird", "message": "animal bird", "order": 41},
        {"key": "sky-weather", "message": "sky & weather", "order": 100}
    ]
}"#;

pub const SAMPLE_DATA: &str = r#"[
    {"label": "grinning face", "hexcode": "1F600", "tags": ["face", "grin"], "emoji": "😀", "group": 0, "subgroup": 0},
    {"label": "grinning face with big eyes", "hexcode": "1F603", "tags": ["face", "mouth", "open", "smile"], "emoji": "😃", "group": 0, "subgroup": 0},
    {"label": "smiling face with heart-eyes", "hexcode": "1F60D", "tags": ["eye", "face", "love", "smile"], "emoji": "😍", "group": 0, "subgroup": 1},
    {"label": "thumbs up", "hexcode": "1F44D", "tags": ["+1", "hand", "thumb", "up"], "emoji": "👍", "group": 1, "subgroup": 10,
     "skins": [
        {"label": "thumbs up: light skin tone", "hexcode": "1F44D-1F3FB", "emoji": "👍🏻"},
        {"label": "thumbs up: dark skin tone", "hexcode": "1F44D-1F3FF", "emoji": "👍🏿"}
     ]},
    {"label": "monkey", "hexcode": "1F412", "tags": ["monkey"], "emoji": "🐒", "group": 3, "subgroup": 40},
    {"label": "dog", "hexcode": "1F415", "tags": ["pet"], "emoji": "🐕", "group": 3, "subgroup": 40},
    {"label": "bird", "hexcode": "1F426", "tags": ["bird"], "emoji": "🐦", "group": 3, "subgroup": 41},
    {"label": "snowman", "hexcode": "2603", "tags": ["cold", "snow"], "emoji": "☃️", "group": 5, "subgroup": 100}
]"#;

pub const SAMPLE_UNICODE_DATA: &str = "\
0020;SPACE;Zs;0;WS;;;;;N;;;;;
00A0;NO-BREAK SPACE;Zs;0;CS;<noBreak> 0020;;;;N;NON-BREAKING SPACE;;;;
2190;LEFTWARDS ARROW;Sm;0;ON;;;;;N;LEFT ARROW;;;;
2192;RIGHTWARDS ARROW;Sm;0;ON;;;;;N;RIGHT ARROW;;;;
2211;N-ARY SUMMATION;Sm;0;ON;;;;;Y;;;;;
20AC;EURO SIGN;Sc;0;ET;;;;;N;;;;;
2603;SNOWMAN;So;0;ON;;;;;N;;;;;
";

/// Items in the sample corpus, variants not counted.
pub const SAMPLE_ITEM_COUNT: usize = 13;
pub const SAMPLE_VARIANT_COUNT: usize = 2;
pub const SAMPLE_GROUP_COUNT: usize = 8;

/// Top-level group symbols of the sample corpus in display order.
pub const SAMPLE_GROUPS: [&str; SAMPLE_GROUP_COUNT] =
    ["😀", "👍️", "🐒", "☀️", "💰️", "➹", "∛", "␠"];

/// A three-by-three layout small enough that the sample groups span two pages.
pub const NUMPAD_CONFIG: &str = r#"[board]
layout = "numpad"

[[layout]]
name = "Numpad"
symbol = "🔢"
keys = """
789
456
123
"""
"#;

/// Recent list with one favorite and one ordinary entry.
pub const SAMPLE_RECENT: &str = "\
100;🐒;1F412;monkey;animals & nature;animal mammal;monkey
20;😀;1F600;grinning face;smileys & emotion;face smiling;face, grin
";

/// Write the sample emojibase files and UnicodeData.txt the way the default
/// `[sources]` configuration expects them below `cache_dir`.
pub fn write_sources(cache_dir: &Path) -> Result<()> {
    let emojibase_dir = cache_dir.join("emojibase");
    fs::create_dir_all(&emojibase_dir)?;
    fs::write(emojibase_dir.join("data.raw.json"), SAMPLE_DATA)?;
    fs::write(emojibase_dir.join("messages.raw.json"), SAMPLE_MESSAGES)?;
    fs::write(cache_dir.join("UnicodeData.txt"), SAMPLE_UNICODE_DATA)?;
    Ok(())
}
