//! Physical key grids.
//!
//! A layout is a list of rows; every non-whitespace character is a key,
//! whitespace is a placeholder that occupies a column but binds nothing.
//! Keys are assigned to page items in row-major order.

use std::collections::{HashMap, HashSet};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<char>>,
    width: usize,
    key_count: usize,
}

/// A layout together with the name and symbol it is listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedLayout {
    pub name: String,
    pub symbol: String,
    pub layout: Layout,
}

impl NamedLayout {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, layout: Layout) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            layout,
        }
    }
}

pub(crate) fn is_placeholder(c: char) -> bool {
    c.is_whitespace()
}

/// The other-case form of a letter, if it is a single character.
pub(crate) fn invert_case(c: char) -> Option<char> {
    if c.is_lowercase() {
        single(c.to_uppercase())
    } else if c.is_uppercase() {
        single(c.to_lowercase())
    } else {
        None
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

impl Layout {
    pub fn new<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().trim_end_matches('\r').chars().collect())
            .collect();

        let mut seen = HashSet::new();
        for &key in rows.iter().flatten().filter(|c| !is_placeholder(**c)) {
            if !seen.insert(key) {
                return Err(Error::DuplicateKey(key));
            }
        }
        if seen.is_empty() {
            return Err(Error::EmptyLayout);
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Ok(Self {
            width,
            key_count: seen.len(),
            rows,
        })
    }

    /// Parse a multi-line layout string, ignoring blank leading and trailing lines.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        match (first, last) {
            (Some(first), Some(last)) => Self::new(&lines[first..=last]),
            _ => Err(Error::EmptyLayout),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn key_count(&self) -> usize {
        self.key_count
    }

    pub fn row(&self, y: usize) -> &[char] {
        self.rows.get(y).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn key_at(&self, x: usize, y: usize) -> Result<char> {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .ok_or(Error::OutOfBounds { x, y })
    }

    pub fn is_key(&self, x: usize, y: usize) -> bool {
        self.key_at(x, y).is_ok_and(|c| !is_placeholder(c))
    }

    /// Position of `key`, first occurrence in row-major order. Exact match only.
    pub fn key_position(&self, key: char) -> Option<(usize, usize)> {
        if is_placeholder(key) {
            return None;
        }
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.iter().position(|&c| c == key).map(|x| (x, y))
        })
    }

    /// The key as it appears on the layout: `key` itself, or its case-inverted
    /// form when only that one exists (layouts list letters in uppercase).
    pub fn resolve_key(&self, key: char) -> Option<char> {
        if self.key_position(key).is_some() {
            return Some(key);
        }
        invert_case(key).filter(|&inverted| self.key_position(inverted).is_some())
    }

    /// Key characters in row-major order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.rows
            .iter()
            .flatten()
            .copied()
            .filter(|&c| !is_placeholder(c))
    }

    pub fn first_key(&self) -> char {
        // a layout always has at least one key
        self.keys().next().unwrap_or(' ')
    }

    /// Row-major slot of `key` among all keys.
    pub fn key_index(&self, key: char) -> Option<usize> {
        self.keys().position(|c| c == key)
    }

    pub fn key_at_index(&self, index: usize) -> Option<char> {
        self.keys().nth(index)
    }

    /// Bind keys to `items[offset..]` in row-major order. Keys past the end
    /// of the list are left out.
    pub fn build_mapping<'a, T>(&self, items: &'a [T], offset: usize) -> HashMap<char, &'a T> {
        self.keys()
            .zip(items.iter().skip(offset))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORNE: &str = "
JDUAX PHLMW
CTIEO BNRSG
?,VFQ YKZ.-
";

    #[test]
    fn test_dimensions() {
        let layout = Layout::new(["1234", "QWE", "AS D"]).unwrap();
        assert_eq!(layout.width(), 4);
        assert_eq!(layout.height(), 3);
        assert_eq!(layout.key_count(), 10);
    }

    #[test]
    fn test_parse_trims_blank_lines() {
        let layout = Layout::parse(CORNE).unwrap();
        assert_eq!(layout.height(), 3);
        assert_eq!(layout.width(), 11);
        assert_eq!(layout.key_count(), 30);
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        assert!(matches!(Layout::parse("  \n \n"), Err(Error::EmptyLayout)));
        assert!(matches!(Layout::new(["   "]), Err(Error::EmptyLayout)));
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        assert!(matches!(
            Layout::new(["ABC", "CDE"]),
            Err(Error::DuplicateKey('C'))
        ));
    }

    #[test]
    fn test_key_at_bounds() {
        let layout = Layout::parse(CORNE).unwrap();
        assert_eq!(layout.key_at(0, 0).unwrap(), 'J');
        assert_eq!(layout.key_at(5, 1).unwrap(), ' ');
        assert!(matches!(
            layout.key_at(11, 0),
            Err(Error::OutOfBounds { x: 11, y: 0 })
        ));
        assert!(layout.key_at(0, 3).is_err());
        assert!(!layout.is_key(5, 1));
        assert!(layout.is_key(6, 1));
    }

    #[test]
    fn test_key_position_and_case_retry() {
        let layout = Layout::parse(CORNE).unwrap();
        assert_eq!(layout.key_position('B'), Some((6, 1)));
        assert_eq!(layout.key_position('b'), None);
        assert_eq!(layout.resolve_key('b'), Some('B'));
        assert_eq!(layout.resolve_key(','), Some(','));
        assert_eq!(layout.resolve_key('1'), None);
        assert_eq!(layout.key_position(' '), None);
    }

    #[test]
    fn test_resolve_prefers_exact_case() {
        let layout = Layout::new(["aA"]).unwrap();
        assert_eq!(layout.resolve_key('a'), Some('a'));
        assert_eq!(layout.resolve_key('A'), Some('A'));
    }

    #[test]
    fn test_key_index_round_trip() {
        let layout = Layout::parse(CORNE).unwrap();
        assert_eq!(layout.key_index('J'), Some(0));
        assert_eq!(layout.key_index('P'), Some(5));
        assert_eq!(layout.key_index('C'), Some(10));
        assert_eq!(layout.key_at_index(10), Some('C'));
        assert_eq!(layout.key_at_index(30), None);
    }

    #[test]
    fn test_build_mapping_with_offset_and_short_list() {
        let layout = Layout::new(["AB", "CD"]).unwrap();
        let items = vec![1, 2, 3, 4, 5, 6];

        let mapping = layout.build_mapping(&items, 4);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping[&'A'], &5);
        assert_eq!(mapping[&'B'], &6);
        assert!(!mapping.contains_key(&'C'));

        let mapping = layout.build_mapping(&items, 0);
        assert_eq!(mapping[&'D'], &4);
    }

    #[test]
    fn test_invert_case() {
        assert_eq!(invert_case('a'), Some('A'));
        assert_eq!(invert_case('Ü'), Some('ü'));
        assert_eq!(invert_case('1'), None);
        // 'ß' uppercases to "SS"
        assert_eq!(invert_case('ß'), None);
    }
}
