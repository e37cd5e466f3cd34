//! Arranges the flat corpus into the top-level pages of the board.
//!
//! Patterns are tried in table order and the first match decides the group:
//! either the item's symbol is listed explicitly, or its category and
//! subcategory keys match the pattern's regexes. Groups are shown sorted by
//! their `order`. The last pattern catches everything else.

use std::collections::HashMap;
use std::sync::LazyLock;

use emokbd_types::{GroupBuilder, Item};
use regex::Regex;
use tracing::{debug, warn};

pub struct GroupPattern {
    pub order: u32,
    pub symbol: &'static str,
    category: Option<Regex>,
    subcategory: Option<Regex>,
    symbols: &'static str,
}

impl GroupPattern {
    fn new(
        order: u32,
        symbol: &'static str,
        category: &str,
        subcategory: &str,
        symbols: &'static str,
    ) -> Self {
        let compile = |re: &str| (!re.is_empty()).then(|| Regex::new(re).unwrap());
        Self {
            order,
            symbol,
            category: compile(category),
            subcategory: compile(subcategory),
            symbols,
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        if !self.symbols.is_empty() && self.symbols.contains(item.symbol.as_str()) {
            return true;
        }
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|re| re.is_match(&item.category));
        let subcategory_ok = self
            .subcategory
            .as_ref()
            .is_none_or(|re| re.is_match(&item.subcategory));
        category_ok && subcategory_ok
    }
}

static PATTERNS: LazyLock<Vec<GroupPattern>> = LazyLock::new(|| {
    let p = GroupPattern::new;
    vec![
        p(0x040, "🤡", "smileys-emotion", "costume|cat|monkey", "😈👿💀☠️🗿🪬🫈"),
        p(0x030, "😐️", "smileys-emotion", "face-neutral-skeptical", "🤔🫡😔😪😴🫩🫪🥸🧐"),
        p(0x020, "☹️", "smileys-emotion", "negative|concerned|unwell", ""),
        p(0x060, "❤️", "smileys-emotion", "emotion|heart", ""),
        p(0x010, "😀", "smileys-emotion", "", ""),
        p(0x050, "👍️", "people-body", "hand|body", "👣🫆"),
        p(0x080, "💃", "people-body", "sport|activity|game|award-medal", ""),
        p(0x081, "⚽️", "activities", "sport|activity|game|award-medal", "🎭️🖼️"),
        p(0x070, "🧑", "people-body", "", ""),
        p(0x090, "🐒", "animals-nature", "animal", "🫍"),
        p(0x100, "🌿", "animals-nature", "plant", ""),
        p(0x120, "🍽️", "food-drink", "dishware", ""),
        p(0x110, "🍎", "food-drink", "", ""),
        p(0x130, "☀️", "travel-places", "sky-weather", ""),
        p(0x140, "🚂", "travel-places|symbols", "transport-", ""),
        p(0x160, "⌚️", "travel-places", "time", ""),
        p(0x150, "🏖️", "travel-places", "", "🪧"),
        p(0x170, "🎄", "activities", "event", ""),
        p(0x190, "📸", "objects", "light-video", ""),
        p(0x180, "🔧", "objects|activities", "tool|science", "🎨🪢"),
        p(0x200, "👕", "objects", "clothing", "🧵🪡🧶"),
        p(0x210, "💰️", "objects", "money", ""),
        p(0x220, "🎶", "objects", "music|sound", "🪊🎼"),
        p(0x230, "🖥️", "objects", "phone|computer|mail", "📶🛜📳📴"),
        p(0x240, "✏️", "objects", "writing|office|book-paper|lock", "🚬🪪"),
        p(0x250, "🚪", "objects", "household", ""),
        p(0x260, "🩺", "objects", "medical|other", ""),
        p(0x270, "☯️", "symbols", "", "🗣️👤👥🫂"),
        p(0x280, "🏳️‍🌈", "flags", "", ""),
        p(0x290, "➹", "arrows", "", ""),
        p(0x300, "∛", "math", "", ""),
        p(0x310, "Ω", "greek", "", ""),
        p(0x320, "╚", "box drawing", "", ""),
        p(0x330, "␠", "space & punctuation", "", ""),
        p(0x500, "…", "all the rest", "", ""),
    ]
});

pub fn patterns() -> &'static [GroupPattern] {
    &PATTERNS
}

/// Index of the pattern an item belongs to. Unmatched items fall into the
/// catch-all.
pub fn pattern_for(item: &Item) -> usize {
    let patterns = patterns();
    patterns
        .iter()
        .position(|p| p.matches(item))
        .unwrap_or_else(|| {
            warn!(
                symbol = %item.symbol,
                label = %item.label,
                category = %item.classification(),
                "no group pattern matches"
            );
            patterns.len() - 1
        })
}

/// Finalise a group page. Its label is the category of its first member.
pub fn finish_group(builder: GroupBuilder) -> Item {
    let mut group = builder.finish();
    if group.label.is_empty() {
        group.label = group.category.clone();
    }
    group
}

/// Build the top-level groups.
///
/// `assignments[i]` is the pattern index for `items[i]`, computed on the
/// classification keys before they were replaced by display names.
pub fn build_groups(items: &[Item], assignments: &[usize]) -> Vec<Item> {
    let patterns = patterns();
    let mut builders: Vec<(u32, GroupBuilder)> = Vec::new();
    let mut by_pattern: HashMap<usize, usize> = HashMap::new();

    for (item, &pattern) in items.iter().zip(assignments) {
        let slot = *by_pattern.entry(pattern).or_insert_with(|| {
            let p = &patterns[pattern];
            builders.push((p.order, GroupBuilder::new(p.symbol)));
            builders.len() - 1
        });
        builders[slot].1.push(item.clone());
    }

    builders.sort_by_key(|(order, _)| *order);
    let groups: Vec<Item> = builders
        .into_iter()
        .map(|(_, builder)| finish_group(builder))
        .collect();
    debug!(groups = groups.len(), "corpus grouped");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(symbol: &str, category: &str, subcategory: &str) -> Item {
        Item::new(symbol)
            .with_code("1F600")
            .with_category(category, subcategory)
    }

    fn symbol_of(item: &Item) -> &'static str {
        patterns()[pattern_for(item)].symbol
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        assert_eq!(symbol_of(&item("😺", "smileys-emotion", "cat-face")), "🤡");
        assert_eq!(symbol_of(&item("😀", "smileys-emotion", "face-smiling")), "😀");
        assert_eq!(symbol_of(&item("😟", "smileys-emotion", "face-concerned")), "☹️");
        assert_eq!(symbol_of(&item("🐕", "animals-nature", "animal-mammal")), "🐒");
        assert_eq!(symbol_of(&item("←", "arrows", "Sm")), "➹");
    }

    #[test]
    fn test_explicit_symbols_override_classification() {
        // listed under the costume group although it is a neutral face
        assert_eq!(symbol_of(&item("💀", "smileys-emotion", "face-negative")), "🤡");
        assert_eq!(symbol_of(&item("🤔", "smileys-emotion", "face-hand")), "😐️");
        assert_eq!(symbol_of(&item("🪧", "objects", "other-object")), "🏖️");
    }

    #[test]
    fn test_unmatched_items_fall_into_catch_all() {
        assert_eq!(symbol_of(&item("🏻", "component", "skin-tone")), "…");
        assert_eq!(symbol_of(&item("☃", "all the rest", "So")), "…");
    }

    #[test]
    fn test_groups_are_sorted_by_order() {
        let items = vec![
            item("☃", "all the rest", "So"),
            item("😀", "smileys-emotion", "face-smiling"),
            item("😺", "smileys-emotion", "cat-face"),
            item("😃", "smileys-emotion", "face-smiling"),
        ];
        let assignments: Vec<usize> = items.iter().map(pattern_for).collect();
        let groups = build_groups(&items, &assignments);

        let symbols: Vec<&str> = groups.iter().map(|g| g.symbol.as_str()).collect();
        assert_eq!(symbols, ["😀", "🤡", "…"]);
        assert_eq!(groups[0].children.len(), 2);
        assert_eq!(groups[0].label, "smileys-emotion");
        assert!(!groups[0].has_code());
    }
}
