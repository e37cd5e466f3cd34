//! Custom assertions for emokbd-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - Symbol lists in JSON output
//! - Plain output containing a set of symbols

use anyhow::{Context, Result};
use predicates::prelude::*;
use predicates::BoxPredicate;
use serde_json::Value;

/// Symbols of `content.items` in JSON output, in order.
pub fn item_symbols(json: &Value) -> Result<Vec<String>> {
    let items = json["content"]["items"]
        .as_array()
        .context("Expected 'content.items' array in JSON")?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["symbol"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Item {} missing symbol", i))
        })
        .collect()
}

/// Assert that JSON output lists exactly `expected`, in order.
pub fn assert_item_symbols(json: &Value, expected: &[&str]) -> Result<()> {
    let symbols = item_symbols(json)?;
    if symbols != expected {
        anyhow::bail!("Expected symbols {:?}, got {:?}", expected, symbols);
    }
    Ok(())
}

/// Predicate for output that mentions every one of `parts`.
pub fn contains_all(parts: &[&str]) -> BoxPredicate<str> {
    let start: BoxPredicate<str> = predicate::always().boxed();
    parts
        .iter()
        .fold(start, |acc, part| acc.and(predicate::str::contains(*part)).boxed())
}
