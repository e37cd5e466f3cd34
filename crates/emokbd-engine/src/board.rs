//! The navigation engine: a stack of pages bound to the keys of the active
//! layout, a cursor, and the recent/search/settings pseudo pages.
//!
//! The root page starts with three pseudo entries (recent list, search
//! results, settings) followed by the corpus groups. Entering a pseudo entry
//! is decided by its root slot, not by the item.

use std::collections::HashMap;

use emokbd_types::{Item, Mark};
use tracing::{debug, info, warn};

use crate::cursor::{Cursor, Resolve};
use crate::layout::{Layout, NamedLayout};
use crate::page::{Frame, Page, PageKind};
use crate::ranker;
use crate::recent::RecentStore;
use crate::{Error, Result};

pub const RECENT_SYMBOL: &str = "⟲";
pub const RECENT_LABEL: &str = "Recent List";
pub const SEARCH_SYMBOL: &str = "🔎";
pub const SEARCH_LABEL: &str = "Search Results";
pub const SETTINGS_SYMBOL: &str = "⚙️";
pub const SETTINGS_LABEL: &str = "Settings";

const SETTINGS_CATEGORY: &str = "Settings";
const SETTINGS_SUBCATEGORY: &str = "Keyboard Layout";

/// Outcome of choosing a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A page of the given kind was pushed.
    Entered(PageKind),
    /// A leaf item was chosen; the caller inserts it.
    Selected(Item),
    /// A layout was picked on the settings page.
    LayoutChanged(String),
    /// Nothing is bound to the key.
    Ignored,
}

#[derive(Debug)]
pub struct Board {
    layouts: Vec<NamedLayout>,
    active_layout: usize,
    all_items: Vec<Item>,
    root: Vec<Item>,
    recent: RecentStore,
    search_results: Vec<Item>,
    settings: Vec<Item>,
    query: String,
    page: Page,
    stack: Vec<Frame>,
    cursor: Cursor,
    recent_offset: usize,
    search_offset: usize,
}

fn pseudo_item(symbol: &str, label: &str) -> Item {
    Item::new(symbol).with_label(label)
}

/// Last offset at which a page of `len` items still shows something.
fn last_page_start(len: usize, key_count: usize) -> usize {
    if len == 0 {
        0
    } else {
        ((len - 1) / key_count) * key_count
    }
}

fn clamp_offset(offset: usize, len: usize, key_count: usize) -> usize {
    ((offset / key_count) * key_count).min(last_page_start(len, key_count))
}

impl Board {
    /// Build a board over a materialised corpus.
    ///
    /// `active` names the layout to start with (case-insensitive).
    pub fn new(
        layouts: Vec<NamedLayout>,
        active: &str,
        all_items: Vec<Item>,
        groups: Vec<Item>,
        recent: RecentStore,
    ) -> Result<Self> {
        if layouts.is_empty() {
            return Err(Error::NoLayouts);
        }
        let active_layout = find_layout(&layouts, active)?;

        let mut root = vec![
            pseudo_item(RECENT_SYMBOL, RECENT_LABEL),
            pseudo_item(SEARCH_SYMBOL, SEARCH_LABEL),
            pseudo_item(SETTINGS_SYMBOL, SETTINGS_LABEL),
        ];
        root.extend(groups);

        let cursor = Cursor::home(&layouts[active_layout].layout);
        let mut board = Self {
            layouts,
            active_layout,
            all_items,
            root,
            recent,
            search_results: Vec::new(),
            settings: Vec::new(),
            query: String::new(),
            page: Page::root(),
            stack: Vec::new(),
            cursor,
            recent_offset: 0,
            search_offset: 0,
        };
        board.refresh_settings();
        info!(
            layout = %board.layout_name(),
            items = board.all_items.len(),
            groups = board.root.len() - PageKind::PSEUDO.len(),
            "board ready"
        );
        Ok(board)
    }

    // --- accessors ---

    pub fn layout(&self) -> &Layout {
        &self.layouts[self.active_layout].layout
    }

    pub fn layout_name(&self) -> &str {
        &self.layouts[self.active_layout].name
    }

    pub fn layouts(&self) -> &[NamedLayout] {
        &self.layouts
    }

    pub fn active_layout(&self) -> usize {
        self.active_layout
    }

    pub fn all_items(&self) -> &[Item] {
        &self.all_items
    }

    pub fn recent(&self) -> &RecentStore {
        &self.recent
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Items of the active page.
    pub fn items(&self) -> &[Item] {
        match self.page.kind {
            PageKind::Root => &self.root,
            PageKind::Recent => self.recent.items(),
            PageKind::Search => &self.search_results,
            PageKind::Settings => &self.settings,
            PageKind::Group => &self.page.items,
        }
    }

    pub fn page_kind(&self) -> PageKind {
        self.page.kind
    }

    /// Label of the item the active page was entered through.
    pub fn page_title(&self) -> &str {
        &self.page.title
    }

    /// Number of pages below the active one.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn offset(&self) -> usize {
        self.page.offset
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn cursor_x(&self) -> usize {
        self.cursor.x
    }

    pub fn cursor_y(&self) -> usize {
        self.cursor.y
    }

    pub fn current_key(&self) -> char {
        self.cursor.key
    }

    pub fn is_root(&self) -> bool {
        self.page.kind == PageKind::Root
    }

    pub fn is_recent(&self) -> bool {
        self.page.kind == PageKind::Recent
    }

    pub fn is_search(&self) -> bool {
        self.page.kind == PageKind::Search
    }

    pub fn is_settings(&self) -> bool {
        self.page.kind == PageKind::Settings
    }

    /// Current and total page numbers, both 1-based.
    pub fn page_of_pages(&self) -> (usize, usize) {
        let len = self.items().len();
        let key_count = self.layout().key_count();
        if len <= key_count {
            return (1, 1);
        }
        (self.page.offset / key_count + 1, (len - 1) / key_count + 1)
    }

    // --- key mapping ---

    /// Keys of the active layout bound to the visible slice of the page.
    pub fn mapping(&self) -> HashMap<char, &Item> {
        self.layout().build_mapping(self.items(), self.page.offset)
    }

    /// Page index bound to `key`, if any.
    fn index_for_key(&self, key: char) -> Option<usize> {
        let layout = self.layout();
        let key = layout.resolve_key(key)?;
        let index = self.page.offset + layout.key_index(key)?;
        (index < self.items().len()).then_some(index)
    }

    pub fn has_key(&self, key: char) -> bool {
        self.index_for_key(key).is_some()
    }

    /// Item under the cursor.
    pub fn get_emoji(&self) -> Option<&Item> {
        self.index_for_key(self.cursor.key)
            .map(|index| &self.items()[index])
    }

    pub fn get_emoji_for_key(&self, key: char) -> Option<&Item> {
        match self.index_for_key(key) {
            Some(index) => Some(&self.items()[index]),
            None => {
                debug!(%key, page = %self.page.kind, "no item bound to key");
                None
            }
        }
    }

    /// Root slots and the settings page hold entries, not pickable items.
    fn is_pickable(&self, index: usize) -> bool {
        match self.page.kind {
            PageKind::Root => index >= PageKind::PSEUDO.len(),
            PageKind::Settings => false,
            _ => true,
        }
    }

    fn current_pickable(&self) -> Option<Item> {
        let index = self.index_for_key(self.cursor.key)?;
        self.is_pickable(index).then(|| self.items()[index].clone())
    }

    // --- cursor ---

    pub fn move_cursor(&mut self, dx: i32, dy: i32) -> (usize, usize) {
        let layout = &self.layouts[self.active_layout].layout;
        self.cursor = self.cursor.moved(layout, dx, dy);
        self.cursor.position()
    }

    pub fn move_cursor_with(&mut self, dx: i32, dy: i32, resolve: Resolve) -> (usize, usize) {
        let layout = &self.layouts[self.active_layout].layout;
        self.cursor = self.cursor.moved_with(layout, dx, dy, resolve);
        self.cursor.position()
    }

    pub fn set_cursor_to_key(&mut self, key: char) -> Result<(usize, usize)> {
        match Cursor::at_key(self.layout(), key) {
            Ok(cursor) => {
                self.cursor = cursor;
                Ok(cursor.position())
            }
            Err(err) => {
                warn!(%key, layout = %self.layout_name(), "key not on layout");
                Err(err)
            }
        }
    }

    fn cursor_home(&mut self) {
        self.cursor = Cursor::home(self.layout());
    }

    // --- page stack ---

    fn push_page(&mut self, page: Page) {
        debug!(kind = %page.kind, title = %page.title, depth = self.stack.len() + 1, "push page");
        let previous = std::mem::replace(&mut self.page, page);
        self.stack.push(Frame {
            page: previous,
            key: self.cursor.key,
        });
        self.cursor_home();
    }

    /// Show `items` as a new page on top of the current one.
    pub fn push_board(&mut self, title: impl Into<String>, items: Vec<Item>) {
        self.push_page(Page::group(title.into(), items));
    }

    fn enter(&mut self, kind: PageKind) {
        let key_count = self.layout().key_count();
        let (title, offset) = match kind {
            PageKind::Recent => (
                RECENT_LABEL,
                clamp_offset(self.recent_offset, self.recent.len(), key_count),
            ),
            PageKind::Search => (
                SEARCH_LABEL,
                clamp_offset(self.search_offset, self.search_results.len(), key_count),
            ),
            PageKind::Settings => (SETTINGS_LABEL, 0),
            PageKind::Root | PageKind::Group => ("", 0),
        };
        self.push_page(Page::view(kind, title.to_string(), offset));
    }

    /// Return to the previous page. No-op on the root page.
    pub fn pop_board(&mut self) -> bool {
        let Some(frame) = self.stack.pop() else {
            return false;
        };
        self.page = frame.page;
        let key_count = self.layout().key_count();
        self.page.offset = clamp_offset(self.page.offset, self.items().len(), key_count);
        self.remember_offset();

        if self.has_key(frame.key) {
            // the key was on the layout when the frame was pushed
            let _ = self.set_cursor_to_key(frame.key);
        } else {
            self.cursor_home();
        }
        debug!(kind = %self.page.kind, depth = self.stack.len(), "pop page");
        true
    }

    /// Pop back to the root page.
    pub fn pop_all(&mut self) {
        while self.pop_board() {}
    }

    /// Enter the item bound to `key`. Returns false for unbound keys and
    /// items without a sub-page.
    pub fn push_key(&mut self, key: char) -> bool {
        let Some(index) = self.index_for_key(key) else {
            return false;
        };
        self.enter_index(index, true)
    }

    fn enter_index(&mut self, index: usize, force: bool) -> bool {
        if self.page.kind == PageKind::Root && index < PageKind::PSEUDO.len() {
            self.enter(PageKind::PSEUDO[index]);
            return true;
        }
        let item = &self.items()[index];
        if item.is_group() && (force || !item.has_code()) {
            let title = item.label.clone();
            let children = item.children.clone();
            self.push_board(title, children);
            return true;
        }
        false
    }

    // --- activation ---

    /// Choose `key`: move the cursor there and act on its item.
    pub fn activate(&mut self, key: char, prefix: bool) -> Result<Activation> {
        self.set_cursor_to_key(key)?;
        Ok(self.activate_current(prefix))
    }

    /// Act on the item under the cursor. With `prefix`, an item that has
    /// variants opens them instead of being selected.
    pub fn activate_current(&mut self, prefix: bool) -> Activation {
        let Some(index) = self.index_for_key(self.cursor.key) else {
            return Activation::Ignored;
        };
        if self.page.kind == PageKind::Settings {
            return match self.select_layout(index) {
                Ok(()) => Activation::LayoutChanged(self.layout_name().to_string()),
                Err(_) => Activation::Ignored,
            };
        }
        if self.enter_index(index, prefix) {
            return Activation::Entered(self.page.kind);
        }
        let item = self.items()[index].clone();
        if item.symbol.is_empty() {
            return Activation::Ignored;
        }
        Activation::Selected(item)
    }

    // --- scrolling ---

    fn remember_offset(&mut self) {
        match self.page.kind {
            PageKind::Recent => self.recent_offset = self.page.offset,
            PageKind::Search => self.search_offset = self.page.offset,
            _ => {}
        }
    }

    /// Move a whole page forward (positive) or back (negative).
    pub fn scroll(&mut self, direction: i32) -> usize {
        let key_count = self.layout().key_count();
        let len = self.items().len();
        let step = key_count as i64 * direction.signum() as i64;
        let target = (self.page.offset as i64 + step).max(0) as usize;
        self.page.offset = target.min(last_page_start(len, key_count));
        self.remember_offset();
        self.page.offset
    }

    // --- search ---

    /// Replace the search results with matches for `query` and show them.
    /// Returns the number of results.
    pub fn search(&mut self, query: &str) -> usize {
        if self.page.kind != PageKind::Search {
            self.enter(PageKind::Search);
        }
        self.query = query.to_string();
        self.search_results = ranker::search(&self.all_items, query);
        self.page.offset = 0;
        self.search_offset = 0;
        self.cursor_home();
        self.search_results.len()
    }

    // --- recent list ---

    fn clamp_recent_page(&mut self) {
        if self.page.kind == PageKind::Recent {
            let key_count = self.layout().key_count();
            self.page.offset = clamp_offset(self.page.offset, self.recent.len(), key_count);
            self.remember_offset();
        }
    }

    /// Record a use of the item under the cursor.
    pub fn recent_add(&mut self) -> bool {
        let Some(item) = self.current_pickable() else {
            return false;
        };
        let on_recent = self.is_recent();
        let added = self.recent.add(&item, on_recent);
        self.clamp_recent_page();
        added
    }

    pub fn recent_delete(&mut self) -> bool {
        let Some(item) = self.current_pickable() else {
            return false;
        };
        let deleted = self.recent.delete(&item.symbol);
        self.clamp_recent_page();
        deleted
    }

    /// Toggle the favorite pin of the item under the cursor. Returns the
    /// new state, or `None` when there is no item.
    pub fn recent_toggle_favorite(&mut self) -> Option<bool> {
        let item = self.current_pickable()?;
        Some(self.recent.toggle_favorite(&item))
    }

    /// Move the recent entry under the cursor one place; the cursor follows
    /// it, scrolling when it crosses a page boundary.
    pub fn move_recent_emoji(&mut self, direction: i32) -> bool {
        if !self.is_recent() {
            return false;
        }
        let Some(item) = self.current_pickable() else {
            return false;
        };
        if !self.recent.reorder(&item.symbol, direction) {
            return false;
        }
        let Some(index) = self.recent.position(&item.symbol) else {
            return false;
        };
        let key_count = self.layout().key_count();
        if index < self.page.offset || index >= self.page.offset + key_count {
            self.scroll(direction);
        }
        let slot = index.saturating_sub(self.page.offset);
        if let Some(key) = self.layout().key_at_index(slot) {
            let _ = self.set_cursor_to_key(key);
        }
        true
    }

    // --- layouts ---

    fn refresh_settings(&mut self) {
        self.settings = self
            .layouts
            .iter()
            .enumerate()
            .map(|(index, named)| {
                let mark = if index == self.active_layout {
                    Mark::ACTIVE
                } else {
                    ""
                };
                Item::new(named.symbol.as_str())
                    .with_label(named.name.as_str())
                    .with_category(SETTINGS_CATEGORY, SETTINGS_SUBCATEGORY)
                    .with_mark(mark)
            })
            .collect();
    }

    /// Switch to the layout at `index`. The cursor keeps its key slot, and
    /// every stored offset is re-aligned to the new key count.
    pub fn select_layout(&mut self, index: usize) -> Result<()> {
        if index >= self.layouts.len() {
            return Err(Error::UnknownLayout(index.to_string()));
        }
        if index == self.active_layout {
            return Ok(());
        }

        let old = self.layouts[self.active_layout].layout.clone();
        self.active_layout = index;
        let new = &self.layouts[index].layout;
        let key_count = new.key_count();

        let remap = |key: char| {
            old.key_index(key)
                .and_then(|slot| new.key_at_index(slot))
                .unwrap_or_else(|| new.first_key())
        };
        let key = remap(self.cursor.key);
        for frame in &mut self.stack {
            frame.key = remap(frame.key);
            frame.page.offset = (frame.page.offset / key_count) * key_count;
        }
        self.page.offset = (self.page.offset / key_count) * key_count;
        self.recent_offset = (self.recent_offset / key_count) * key_count;
        self.search_offset = (self.search_offset / key_count) * key_count;

        self.cursor = Cursor::at_key(new, key).unwrap_or_else(|_| Cursor::home(new));
        self.refresh_settings();
        info!(layout = %self.layout_name(), "layout changed");
        Ok(())
    }

    pub fn select_layout_by_name(&mut self, name: &str) -> Result<()> {
        let index = find_layout(&self.layouts, name)?;
        self.select_layout(index)
    }
}

fn find_layout(layouts: &[NamedLayout], name: &str) -> Result<usize> {
    layouts
        .iter()
        .position(|l| l.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownLayout(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layouts() -> Vec<NamedLayout> {
        vec![
            NamedLayout::new("Small", "S", Layout::new(["ABC", "DEF"]).unwrap()),
            NamedLayout::new("Tiny", "T", Layout::new(["XY", " Z"]).unwrap()),
        ]
    }

    fn leaf(symbol: &str, label: &str) -> Item {
        Item::new(symbol)
            .with_code("1F600")
            .with_category("faces", "smiling")
            .with_label(label)
    }

    fn board() -> Board {
        let corpus: Vec<Item> = (0..8).map(|n| leaf(&format!("e{n}"), &format!("emoji {n}"))).collect();
        let group = Item {
            symbol: "G".into(),
            label: "Group".into(),
            children: corpus.clone(),
            ..Item::default()
        };
        Board::new(layouts(), "small", corpus, vec![group], RecentStore::in_memory()).unwrap()
    }

    #[test]
    fn test_root_page_starts_with_pseudo_entries() {
        let board = board();
        assert!(board.is_root());
        let labels: Vec<&str> = board.items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, [RECENT_LABEL, SEARCH_LABEL, SETTINGS_LABEL, "Group"]);
        assert_eq!(board.current_key(), 'A');
        assert_eq!(board.mapping().len(), 4);
    }

    #[test]
    fn test_unknown_layout_and_no_layouts() {
        let err = Board::new(layouts(), "dvorak", vec![], vec![], RecentStore::in_memory());
        assert!(matches!(err, Err(Error::UnknownLayout(_))));
        let err = Board::new(vec![], "small", vec![], vec![], RecentStore::in_memory());
        assert!(matches!(err, Err(Error::NoLayouts)));
    }

    #[test]
    fn test_activate_pseudo_and_group_pages() {
        let mut board = board();
        assert_eq!(board.activate('a', false).unwrap(), Activation::Entered(PageKind::Recent));
        assert!(board.is_recent());
        assert!(board.pop_board());

        assert_eq!(board.activate('D', false).unwrap(), Activation::Entered(PageKind::Group));
        assert_eq!(board.page_title(), "Group");
        assert_eq!(board.items().len(), 8);
        assert_eq!(board.current_key(), 'A');

        match board.activate('B', false).unwrap() {
            Activation::Selected(item) => assert_eq!(item.symbol, "e1"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_pop_restores_cursor_key() {
        let mut board = board();
        board.set_cursor_to_key('D').unwrap();
        assert!(board.push_key('D'));
        board.move_cursor(1, 1);
        assert!(board.pop_board());
        assert!(board.is_root());
        assert_eq!(board.current_key(), 'D');
        assert!(!board.pop_board());
    }

    #[test]
    fn test_prefix_opens_variants() {
        let base = leaf("👍", "thumbs up");
        let family = Item {
            children: vec![leaf("👍🏻", "thumbs up: light"), leaf("👍🏿", "thumbs up: dark")],
            mark: Mark::VARIANTS.into(),
            ..base
        };
        let mut board = board();
        board.push_board("Hands", vec![family]);

        match board.activate('A', false).unwrap() {
            Activation::Selected(item) => assert_eq!(item.symbol, "👍"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(board.activate('A', true).unwrap(), Activation::Entered(PageKind::Group));
        assert_eq!(board.items()[1].symbol, "👍🏿");
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut board = board();
        assert_eq!(board.activate('F', false).unwrap(), Activation::Ignored);
        assert!(board.activate('?', false).is_err());
        assert!(board.get_emoji_for_key('F').is_none());
        assert!(!board.has_key('F'));
        assert!(board.has_key('d'));
    }

    #[test]
    fn test_scroll_and_page_of_pages() {
        let mut board = board();
        board.push_key('D');
        assert_eq!(board.page_of_pages(), (1, 2));
        assert_eq!(board.scroll(-1), 0);
        assert_eq!(board.scroll(1), 6);
        assert_eq!(board.page_of_pages(), (2, 2));
        assert_eq!(board.scroll(1), 6);
        assert_eq!(board.mapping().len(), 2);
        assert_eq!(board.get_emoji_for_key('A').unwrap().symbol, "e6");
    }

    #[test]
    fn test_search_results_and_offset_memory() {
        let mut board = board();
        assert_eq!(board.search("emoji"), 8);
        assert!(board.is_search());
        assert_eq!(board.scroll(1), 6);
        board.pop_board();

        board.activate('B', false).unwrap();
        assert!(board.is_search());
        assert_eq!(board.offset(), 6);

        assert_eq!(board.search("emoji 3"), 1);
        assert_eq!(board.offset(), 0);
        assert_eq!(board.items()[0].symbol, "e3");
        assert_eq!(board.depth(), 1);
    }

    #[test]
    fn test_recent_operations_through_board() {
        let mut board = board();
        board.push_key('D');
        board.set_cursor_to_key('C').unwrap();
        assert!(board.recent_add());
        board.set_cursor_to_key('A').unwrap();
        assert!(board.recent_add());
        assert_eq!(board.recent().items()[0].symbol, "e0");

        board.pop_board();
        // pseudo entries are not recorded
        board.set_cursor_to_key('A').unwrap();
        assert!(!board.recent_add());

        board.activate('A', false).unwrap();
        assert!(board.is_recent());
        assert_eq!(board.get_emoji().unwrap().symbol, "e0");
        assert!(board.move_recent_emoji(1));
        assert_eq!(board.current_key(), 'B');
        assert_eq!(board.get_emoji().unwrap().symbol, "e0");

        assert_eq!(board.recent_toggle_favorite(), Some(true));
        assert!(board.recent_delete());
        assert_eq!(board.recent().len(), 1);
    }

    #[test]
    fn test_settings_switches_layout() {
        let mut board = board();
        board.activate('C', false).unwrap();
        assert!(board.is_settings());
        assert_eq!(board.items()[0].mark, Mark::ACTIVE);

        // slot 1 is the second layout
        assert_eq!(
            board.activate('B', false).unwrap(),
            Activation::LayoutChanged("Tiny".into())
        );
        assert_eq!(board.layout_name(), "Tiny");
        assert_eq!(board.current_key(), 'Y');
        assert_eq!(board.items()[1].mark, Mark::ACTIVE);
        assert_eq!(board.items()[0].mark, "");

        board.pop_board();
        // the root cursor key 'C' (slot 2) became 'Z'
        assert_eq!(board.current_key(), 'Z');
    }
}
