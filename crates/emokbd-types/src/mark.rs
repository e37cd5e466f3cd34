//! Short display annotations attached to items.
//!
//! Marks are derived state: views draw them next to the key, the recency
//! file is the only place they are persisted (implicitly, through the weight).

/// Well-known marks.
pub struct Mark;

impl Mark {
    /// Pinned recent entry (usage weight at the favorite ceiling).
    pub const FAVORITE: &'static str = "⭐";
    /// Item with skin-tone or gender variants reachable through the prefix key.
    pub const VARIANTS: &'static str = "🟤";
    /// Active entry on the settings page.
    pub const ACTIVE: &'static str = "✔";

    /// Mark for a recent entry with the given usage weight.
    pub fn for_weight(weight: u32, favorite_at: u32) -> String {
        if weight >= favorite_at {
            Self::FAVORITE.to_string()
        } else if weight > 0 {
            weight.to_string()
        } else {
            String::new()
        }
    }

    pub fn is_favorite(mark: &str) -> bool {
        mark == Self::FAVORITE
    }
}
