use emokbd_engine::recent::FAVORITE_WEIGHT;
use emokbd_types::Item;

use crate::presentation::view_models::{
    CommandResultViewModel, ItemListViewModel, ItemViewModel, StatusBadge, Tip,
};

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn item_view(item: &Item) -> ItemViewModel {
    ItemViewModel {
        symbol: item.symbol.clone(),
        code: item.code.clone(),
        label: item.label.clone(),
        category: item.category.clone(),
        subcategory: item.subcategory.clone(),
        tags: split_tags(&item.tags),
        variants: item.children.iter().map(|c| c.symbol.clone()).collect(),
        score: None,
        weight: None,
        favorite: false,
    }
}

/// `matches` is the full ranked result; at most `limit` entries are shown.
pub fn present_search_results(
    query: &str,
    matches: &[Item],
    limit: usize,
) -> CommandResultViewModel<ItemListViewModel> {
    let items: Vec<ItemViewModel> = matches
        .iter()
        .take(limit)
        .map(|item| ItemViewModel {
            score: Some(item.search_score),
            ..item_view(item)
        })
        .collect();

    let content = ItemListViewModel {
        query: Some(query.to_string()),
        total: matches.len(),
        items,
    };

    if matches.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning(format!("No match for '{}'", query)))
            .with_tip(
                Tip::new("Insert a code point directly").try_command("emokbd search +1F600"),
            );
    }

    let mut result = CommandResultViewModel::new(content);
    if matches.len() > limit {
        result = result.with_tip(
            Tip::new(format!("Showing {} of {} matches", limit, matches.len()))
                .try_command(format!("emokbd search {} --limit {}", query, matches.len())),
        );
    }
    result
}

pub fn present_recent_list(recent: &[Item]) -> CommandResultViewModel<ItemListViewModel> {
    let items = recent
        .iter()
        .map(|item| ItemViewModel {
            weight: Some(item.usage_weight),
            favorite: item.usage_weight >= FAVORITE_WEIGHT,
            ..item_view(item)
        })
        .collect();

    let content = ItemListViewModel {
        query: None,
        total: recent.len(),
        items,
    };

    if recent.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("The recent list is empty"))
            .with_tip(Tip::new("Pick something first").try_command("emokbd pick"));
    }
    CommandResultViewModel::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(symbol: &str, score: u32) -> Item {
        let mut item = Item::new(symbol).with_label(symbol).with_tags("a, b");
        item.search_score = score;
        item
    }

    #[test]
    fn test_search_results_are_limited_but_counted() {
        let matches = vec![scored("😀", 9), scored("😃", 5), scored("😍", 1)];
        let result = present_search_results("face", &matches, 2);

        assert_eq!(result.content.total, 3);
        assert_eq!(result.content.items.len(), 2);
        assert_eq!(result.content.items[0].score, Some(9));
        assert_eq!(result.content.items[0].tags, ["a", "b"]);
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.badge.is_none());
    }

    #[test]
    fn test_no_match_gets_a_warning() {
        let result = present_search_results("zzz", &[], 20);
        assert!(result.badge.is_some());
        assert!(result.content.items.is_empty());
    }

    #[test]
    fn test_recent_marks_favorites() {
        let mut pinned = Item::new("🐒");
        pinned.usage_weight = FAVORITE_WEIGHT;
        let mut used = Item::new("😀");
        used.usage_weight = 20;

        let result = present_recent_list(&[pinned, used]);
        let favorites: Vec<bool> = result.content.items.iter().map(|i| i.favorite).collect();
        assert_eq!(favorites, [true, false]);
        assert_eq!(result.content.items[1].weight, Some(20));
    }
}
