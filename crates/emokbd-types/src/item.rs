use serde::{Deserialize, Serialize};

/// A displayable symbol bound to a key, optionally owning a sub-collection.
///
/// An item with children is a *group*: a category page, or a family of
/// skin-tone / gender variants hanging off a base emoji. Groups are built
/// with [`GroupBuilder`] and are not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The grapheme shown on the key.
    pub symbol: String,
    /// Uppercase hex code point(s), dash separated. Empty for pure groups.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub label: String,
    /// Comma separated search keywords.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags: String,
    /// Weight maintained by the recency store.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub usage_weight: u32,
    /// Score assigned by the last search that produced this copy.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub search_score: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mark: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl Item {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into().to_uppercase();
        self
    }

    pub fn with_category(
        mut self,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        self.category = category.into();
        self.subcategory = subcategory.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_mark(mut self, mark: impl Into<String>) -> Self {
        self.mark = mark.into();
        self
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Leaf items and variant families carry a code point; pure groups don't.
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    /// `category > subcategory`, or just the category when there is none.
    pub fn classification(&self) -> String {
        if self.subcategory.is_empty() {
            self.category.clone()
        } else {
            format!("{} > {}", self.category, self.subcategory)
        }
    }
}

/// Accumulates children for a group and finalises it into an [`Item`].
///
/// The group inherits the symbol and category of its first child when it
/// has none of its own, and collects the distinct subcategories of all
/// children into a comma joined list.
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    item: Item,
}

impl GroupBuilder {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            item: Item::new(symbol),
        }
    }

    /// Start from an existing item, e.g. a base emoji receiving its variants.
    pub fn from_item(item: Item) -> Self {
        Self { item }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.item.label = label.into();
        self
    }

    pub fn mark(mut self, mark: impl Into<String>) -> Self {
        self.item.mark = mark.into();
        self
    }

    pub fn push(&mut self, child: Item) -> &mut Self {
        let item = &mut self.item;
        if item.symbol.is_empty() {
            item.symbol = child.symbol.clone();
        }
        if item.category.is_empty() {
            item.category = child.category.clone();
        }
        if !item.subcategory.contains(child.subcategory.as_str()) {
            if !item.subcategory.is_empty() {
                item.subcategory.push_str(", ");
            }
            item.subcategory.push_str(&child.subcategory);
        }
        item.children.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.item.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item.children.is_empty()
    }

    pub fn symbol(&self) -> &str {
        &self.item.symbol
    }

    pub fn finish(self) -> Item {
        self.item
    }
}

impl Extend<Item> for GroupBuilder {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        for child in iter {
            self.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emoji(symbol: &str, sub: &str) -> Item {
        Item::new(symbol)
            .with_code("1f600")
            .with_category("smileys-emotion", sub)
    }

    #[test]
    fn test_code_is_uppercased() {
        assert_eq!(Item::new("😀").with_code("1f600").code, "1F600");
    }

    #[test]
    fn test_group_takes_first_child_symbol_and_category() {
        let mut builder = GroupBuilder::new("");
        builder.push(emoji("😀", "face-smiling"));
        builder.push(emoji("😃", "face-smiling"));
        let group = builder.finish();

        assert_eq!(group.symbol, "😀");
        assert_eq!(group.category, "smileys-emotion");
        assert_eq!(group.children.len(), 2);
        assert!(group.is_group());
        assert!(!group.has_code());
    }

    #[test]
    fn test_group_keeps_explicit_symbol() {
        let mut builder = GroupBuilder::new("🤡").label("Group");
        builder.push(emoji("😈", "face-costume"));
        let group = builder.finish();
        assert_eq!(group.symbol, "🤡");
        assert_eq!(group.label, "Group");
    }

    #[test]
    fn test_subcategories_merge_without_duplicates() {
        let mut builder = GroupBuilder::new("");
        builder.extend([
            emoji("😀", "face-smiling"),
            emoji("🥰", "face-affection"),
            emoji("😃", "face-smiling"),
            emoji("😘", "face-affection"),
        ]);
        let group = builder.finish();
        assert_eq!(group.subcategory, "face-smiling, face-affection");
    }

    #[test]
    fn test_variant_family_from_base_item() {
        let base = Item::new("👍").with_code("1F44D").with_category("people-body", "hand-fingers-closed");
        let mut builder = GroupBuilder::from_item(base).mark(crate::Mark::VARIANTS);
        builder.push(
            Item::new("👍🏻")
                .with_code("1F44D-1F3FB")
                .with_category("people-body", "hand-fingers-closed"),
        );
        let family = builder.finish();

        assert!(family.has_code());
        assert!(family.is_group());
        assert_eq!(family.subcategory, "hand-fingers-closed");
        assert_eq!(family.mark, crate::Mark::VARIANTS);
    }

    #[test]
    fn test_classification() {
        let item = Item::new("x").with_category("math", "");
        assert_eq!(item.classification(), "math");
        let item = Item::new("x").with_category("objects", "money");
        assert_eq!(item.classification(), "objects > money");
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let json = serde_json::to_value(Item::new("Ω").with_label("omega")).unwrap();
        assert!(json.get("children").is_none());
        assert!(json.get("usage_weight").is_none());
        assert_eq!(json["symbol"], "Ω");
    }
}
