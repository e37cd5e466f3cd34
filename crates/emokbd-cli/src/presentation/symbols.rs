//! How a symbol is drawn in a fixed-width key cell.
//!
//! Spaces are invisible on a key, so the common Unicode spaces are shown by
//! a short name instead.

use emokbd_types::Item;
use unicode_width::UnicodeWidthStr;

const SPECIAL_NAMES: &[(&str, &str)] = &[
    ("0020", "SP"),
    ("00A0", "NB"),
    ("202F", "nNB"),
    ("2000", "ENQ"),
    ("2001", "EMQ"),
    ("2002", "EN"),
    ("2003", "EM"),
    ("2004", "3EM"),
    ("2005", "4EM"),
    ("2006", "6EM"),
    ("2007", "FS"),
    ("2008", "PS"),
    ("2009", "TS"),
    ("200A", "HS"),
];

/// Short name shown instead of the symbol, if it has one.
pub fn special_name(code: &str) -> Option<&'static str> {
    SPECIAL_NAMES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Text for a key cell, and whether it is a special name.
pub fn cell_text(item: &Item) -> (&str, bool) {
    match special_name(&item.code) {
        Some(name) => (name, true),
        None => (item.symbol.as_str(), false),
    }
}

pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Spaces needed after `text` to fill `width` columns.
pub fn padding(text: &str, width: usize) -> usize {
    width.saturating_sub(display_width(text))
}

pub fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(padding(text, width)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_names() {
        assert_eq!(special_name("00A0"), Some("NB"));
        assert_eq!(special_name("202f"), Some("nNB"));
        assert_eq!(special_name("1F600"), None);
    }

    #[test]
    fn test_cell_text_prefers_special_name() {
        let nbsp = Item::new("\u{a0}").with_code("00A0");
        assert_eq!(cell_text(&nbsp), ("NB", true));
        let grin = Item::new("😀").with_code("1F600");
        assert_eq!(cell_text(&grin), ("😀", false));
    }

    #[test]
    fn test_wide_symbols_take_two_columns() {
        assert_eq!(display_width("😀"), 2);
        assert_eq!(display_width("←"), 1);
        assert_eq!(pad("😀", 3), "😀 ");
        assert_eq!(pad("←", 3), "←  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
