use std::fmt;

use emokbd_types::Item;

/// What a page shows. Only `Group` pages own their items; the others are
/// views of lists the board maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Root,
    Recent,
    Search,
    Settings,
    Group,
}

impl PageKind {
    /// Pseudo pages reachable from the first root slots, in slot order.
    pub const PSEUDO: [PageKind; 3] = [PageKind::Recent, PageKind::Search, PageKind::Settings];
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::Root => "root",
            PageKind::Recent => "recent",
            PageKind::Search => "search",
            PageKind::Settings => "settings",
            PageKind::Group => "group",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Page {
    pub kind: PageKind,
    pub title: String,
    pub items: Vec<Item>,
    pub offset: usize,
}

impl Page {
    pub fn root() -> Self {
        Self::view(PageKind::Root, String::new(), 0)
    }

    pub fn view(kind: PageKind, title: String, offset: usize) -> Self {
        Self {
            kind,
            title,
            items: Vec::new(),
            offset,
        }
    }

    pub fn group(title: String, items: Vec<Item>) -> Self {
        Self {
            kind: PageKind::Group,
            title,
            items,
            offset: 0,
        }
    }
}

/// A page left behind by a push, with the key the cursor was on.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub page: Page,
    pub key: char,
}
