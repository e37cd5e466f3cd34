//! Multi-criteria text search over the flat corpus.
//!
//! A query is a whitespace separated list of tokens, each narrowing the
//! candidate set (logical AND):
//!
//! | token          | matches against                       |
//! |----------------|---------------------------------------|
//! | `cat,sub`      | category and/or subcategory substring |
//! | `+1f60`        | code point substring                  |
//! | `#tag`         | tags                                  |
//! | anything else  | label or tags (union)                 |
//!
//! Every field match adds its boundary-aware score to the candidate, and the
//! survivors are returned best first.

use std::collections::HashSet;

use emokbd_types::Item;
use tracing::debug;

pub const LABEL_WEIGHT: u32 = 1;
pub const TAGS_WEIGHT: u32 = 1;
pub const CLASSIFICATION_WEIGHT: u32 = 1;
pub const CODE_WEIGHT: u32 = 1;

const START_OF_TEXT: u32 = 7;
const START_OF_WORD: u32 = 4;
const END_OF_TEXT: u32 = 5;
const END_OF_WORD: u32 = 2;

/// Label given to items synthesised from a `+<hex>` query.
pub const GENERATED_LABEL: &str = "Generated Character";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Classification {
        category: Option<String>,
        subcategory: Option<String>,
    },
    Code(String),
    Tag(String),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<Token>,
}

impl Query {
    /// Split into tokens. Matching is case-insensitive, so everything is
    /// lowercased here. Tokens that reduce to nothing are dropped.
    pub fn parse(text: &str) -> Self {
        let tokens = text
            .to_lowercase()
            .split_whitespace()
            .filter_map(|token| {
                if let Some((category, subcategory)) = token.split_once(',') {
                    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
                    let (category, subcategory) = (non_empty(category), non_empty(subcategory));
                    (category.is_some() || subcategory.is_some()).then_some(
                        Token::Classification {
                            category,
                            subcategory,
                        },
                    )
                } else if let Some(code) = token.strip_prefix('+') {
                    (!code.is_empty()).then(|| Token::Code(code.to_string()))
                } else if let Some(tag) = token.strip_prefix('#') {
                    (!tag.is_empty()).then(|| Token::Tag(tag.to_string()))
                } else {
                    Some(Token::Text(token.to_string()))
                }
            })
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Boundary-aware substring score of `needle` in `haystack`, 0 if absent.
///
/// Every non-overlapping occurrence scores 1, plus 7 when it starts the text
/// (4 after a non-alphanumeric character), plus 5 when it ends the text
/// (2 before a non-alphanumeric character).
pub fn match_score(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    let haystack = haystack.to_lowercase();
    let needle = needle.to_lowercase();

    haystack
        .match_indices(needle.as_str())
        .map(|(start, found)| {
            let end = start + found.len();
            let before = haystack[..start].chars().next_back();
            let after = haystack[end..].chars().next();

            let lead = match before {
                None => START_OF_TEXT,
                Some(c) if !c.is_alphanumeric() => START_OF_WORD,
                Some(_) => 0,
            };
            let trail = match after {
                None => END_OF_TEXT,
                Some(c) if !c.is_alphanumeric() => END_OF_WORD,
                Some(_) => 0,
            };
            1 + lead + trail
        })
        .sum()
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    score: u32,
}

fn narrow(
    corpus: &[Item],
    candidates: Vec<Candidate>,
    needle: &str,
    field: fn(&Item) -> &str,
    weight: u32,
) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter_map(|mut candidate| {
            let score = match_score(field(&corpus[candidate.index]), needle);
            (score > 0).then(|| {
                candidate.score += score * weight;
                candidate
            })
        })
        .collect()
}

fn apply(corpus: &[Item], candidates: Vec<Candidate>, token: &Token) -> Vec<Candidate> {
    match token {
        Token::Classification {
            category,
            subcategory,
        } => {
            let mut candidates = candidates;
            if let Some(category) = category {
                candidates = narrow(
                    corpus,
                    candidates,
                    category,
                    |item| &item.category,
                    CLASSIFICATION_WEIGHT,
                );
            }
            if let Some(subcategory) = subcategory {
                candidates = narrow(
                    corpus,
                    candidates,
                    subcategory,
                    |item| &item.subcategory,
                    CLASSIFICATION_WEIGHT,
                );
            }
            candidates
        }
        Token::Code(code) => narrow(corpus, candidates, code, |item| &item.code, CODE_WEIGHT),
        Token::Tag(tag) => narrow(corpus, candidates, tag, |item| &item.tags, TAGS_WEIGHT),
        Token::Text(text) => candidates
            .into_iter()
            .filter_map(|mut candidate| {
                let item = &corpus[candidate.index];
                let label = match_score(&item.label, text);
                let tags = match_score(&item.tags, text);
                (label + tags > 0).then(|| {
                    candidate.score += label * LABEL_WEIGHT + tags * TAGS_WEIGHT;
                    candidate
                })
            })
            .collect(),
    }
}

/// Rank `corpus` against `query`.
///
/// An empty query returns the whole corpus in its original order, unscored.
/// Otherwise matches are ordered by score (stable for ties) and de-duplicated
/// by symbol, and each returned copy carries its `search_score`. The corpus
/// itself is never modified.
pub fn search(corpus: &[Item], query: &str) -> Vec<Item> {
    let parsed = Query::parse(query);
    if parsed.is_empty() {
        return corpus
            .iter()
            .cloned()
            .map(|mut item| {
                item.search_score = 0;
                item
            })
            .collect();
    }

    let mut candidates: Vec<Candidate> = (0..corpus.len())
        .map(|index| Candidate { index, score: 0 })
        .collect();
    for token in parsed.tokens() {
        candidates = apply(corpus, candidates, token);
        if candidates.is_empty() {
            break;
        }
    }

    if candidates.is_empty() {
        debug!(query, "no matches");
        return generate(query).into_iter().collect();
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    let mut seen = HashSet::new();
    let results: Vec<Item> = candidates
        .into_iter()
        .filter(|candidate| seen.insert(corpus[candidate.index].symbol.as_str()))
        .map(|candidate| {
            let mut item = corpus[candidate.index].clone();
            item.search_score = candidate.score;
            item
        })
        .collect();
    debug!(query, matches = results.len(), "search finished");
    results
}

/// An ad hoc item for a `+<hex>[-<hex>...]` query, so characters missing
/// from the corpus can still be produced.
pub fn generate(query: &str) -> Option<Item> {
    let code = query.trim_start().strip_prefix('+')?.split_whitespace().next()?;
    let symbol: String = code
        .split('-')
        .map(|part| u32::from_str_radix(part, 16).ok().and_then(char::from_u32))
        .collect::<Option<String>>()?;
    if symbol.is_empty() {
        return None;
    }
    Some(Item::new(symbol).with_code(code).with_label(GENERATED_LABEL))
}
