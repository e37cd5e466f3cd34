//! Reader for `UnicodeData.txt` (`hex;name;general category;...`).
//!
//! Only symbol-like code points are kept; letters of most scripts, controls,
//! modifiers and private use are excluded. Each kept character is classified
//! by its name or general category.

use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use emokbd_types::Item;
use regex::Regex;
use tracing::{debug, info};

use crate::Result;

const EXCLUDED_RANGES: &[(u32, u32)] = &[
    (0x000000, 0x00009F), // ASCII and C1 controls
    (0x000400, 0x001FFE), // Cyrillic through Greek Extended scripts
    (0x0020D0, 0x0020F0), // combining marks for symbols
    (0x002C00, 0x00FFDB), // CJK, Hangul and friends
    (0x010100, 0x01EEFE), // historic and minor scripts
    (0x01F1E6, 0x01F1FF), // regional indicator letters
    (0x01F3FB, 0x01F3FF), // skin tone modifiers
    (0x01F9B0, 0x01F9B3), // hair style components
    (0x01FBFA, 0x033479), // CJK extensions
    (0x0E0001, 0xFFFFFF), // tags and private use
];

const EXCLUDED_POINTS: &[u32] = &[0x00AD, 0x2028, 0x2029];

pub fn is_excluded(code_point: u32) -> bool {
    EXCLUDED_POINTS.contains(&code_point)
        || EXCLUDED_RANGES
            .iter()
            .any(|&(low, high)| (low..=high).contains(&code_point))
}

enum Matcher {
    Name(Regex),
    GeneralCategory(Regex),
}

struct Class {
    category: &'static str,
    /// Fixed subcategory; empty means the general category is used.
    subcategory: &'static str,
    matcher: Matcher,
}

static CLASSES: LazyLock<Vec<Class>> = LazyLock::new(|| {
    let name = |re: &str| Matcher::Name(Regex::new(re).unwrap());
    let general = |re: &str| Matcher::GeneralCategory(Regex::new(re).unwrap());
    vec![
        Class { category: "box drawing", subcategory: "", matcher: name("box drawings ") },
        Class { category: "arrows", subcategory: "", matcher: name("arrow") },
        Class { category: "greek", subcategory: "", matcher: name("greek") },
        Class { category: "math", subcategory: "", matcher: general("^Sm$") },
        Class { category: "objects", subcategory: "money", matcher: general("^Sc$") },
        Class { category: "space & punctuation", subcategory: "", matcher: general("^(Zs|P)") },
        Class { category: "all the rest", subcategory: "", matcher: name(".") },
    ]
});

/// Classify a character by its lowercase name and general category.
/// Returns `(category, subcategory)`.
pub fn classify(name: &str, general_category: &str) -> Option<(&'static str, String)> {
    CLASSES.iter().find_map(|class| {
        let hit = match &class.matcher {
            Matcher::Name(re) => re.is_match(name),
            Matcher::GeneralCategory(re) => re.is_match(general_category),
        };
        hit.then(|| {
            let subcategory = if class.subcategory.is_empty() {
                general_category.to_string()
            } else {
                class.subcategory.to_string()
            };
            (class.category, subcategory)
        })
    })
}

pub fn read_unicode_data(path: &Path) -> Result<Vec<Item>> {
    let file = std::fs::File::open(path)?;
    let items = parse_unicode_data(file)?;
    info!(path = %path.display(), symbols = items.len(), "UnicodeData loaded");
    Ok(items)
}

pub fn parse_unicode_data(reader: impl Read) -> Result<Vec<Item>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 3 {
            continue;
        }
        let (hex, name, general_category) = (&record[0], &record[1], &record[2]);
        let Some(symbol) = u32::from_str_radix(hex, 16)
            .ok()
            .filter(|&cp| !is_excluded(cp))
            .and_then(char::from_u32)
        else {
            continue;
        };
        let name = name.to_lowercase();
        let Some((category, subcategory)) = classify(&name, general_category) else {
            debug!(code = hex, "unclassified code point");
            continue;
        };
        items.push(
            Item::new(symbol.to_string())
                .with_code(hex)
                .with_category(category, subcategory)
                .with_label(name),
        );
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
00A0;NO-BREAK SPACE;Zs;0;CS;<noBreak> 0020;;;;N;NON-BREAKING SPACE;;;;
00A2;CENT SIGN;Sc;0;ET;;;;;N;;;;;
00AD;SOFT HYPHEN;Cf;0;BN;;;;;N;;;;;
00B1;PLUS-MINUS SIGN;Sm;0;ES;;;;;N;PLUS-OR-MINUS SIGN;;;;
2190;LEFTWARDS ARROW;Sm;0;ON;;;;;N;LEFT ARROW;;;;
2500;BOX DRAWINGS LIGHT HORIZONTAL;So;0;ON;;;;;N;FORMS LIGHT HORIZONTAL;;;;
2603;SNOWMAN;So;0;ON;;;;;N;;;;;
2020;DAGGER;Po;0;ON;;;;;N;;;;;
";

    #[test]
    fn test_exclusions() {
        assert!(is_excluded(0x41));
        assert!(is_excluded(0xAD));
        assert!(is_excluded(0x1F3FC));
        assert!(is_excluded(0xF8FF));
        assert!(!is_excluded(0x2603));
        assert!(!is_excluded(0x1F600));
    }

    #[test]
    fn test_classify_order() {
        // arrows win over the math category
        assert_eq!(classify("leftwards arrow", "Sm"), Some(("arrows", "Sm".into())));
        assert_eq!(classify("plus-minus sign", "Sm"), Some(("math", "Sm".into())));
        assert_eq!(classify("cent sign", "Sc"), Some(("objects", "money".into())));
        assert_eq!(classify("dagger", "Po"), Some(("space & punctuation", "Po".into())));
        assert_eq!(classify("snowman", "So"), Some(("all the rest", "So".into())));
        assert_eq!(classify("", "So"), None);
    }

    #[test]
    fn test_parse_sample() {
        let items = parse_unicode_data(SAMPLE.as_bytes()).unwrap();
        let rows: Vec<(&str, &str, &str)> = items
            .iter()
            .map(|i| (i.symbol.as_str(), i.code.as_str(), i.category.as_str()))
            .collect();
        assert_eq!(
            rows,
            [
                ("\u{a0}", "00A0", "space & punctuation"),
                ("¢", "00A2", "objects"),
                ("±", "00B1", "math"),
                ("←", "2190", "arrows"),
                ("─", "2500", "box drawing"),
                ("☃", "2603", "all the rest"),
                ("†", "2020", "space & punctuation"),
            ]
        );
        assert_eq!(items[5].label, "snowman");
    }
}
