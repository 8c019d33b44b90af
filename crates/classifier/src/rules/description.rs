//! Rule-based listing → tag classification.

use std::collections::HashSet;

use nearby_core::{MAX_TAG_LEN, MAX_TAGS, TagResult};

use crate::lexicon::{PHRASE_RULES, is_domain_word, is_stop_word, starter_tags};

/// Name tokens must be longer than this.
const MIN_NAME_TOKEN_LEN: usize = 2;

/// Description tokens must be longer than this.
const MIN_DESCRIPTION_TOKEN_LEN: usize = 3;

/// Tag a business listing using keyword tables and phrase rules only.
///
/// Tags are sorted by length and then alphabetically so the output is
/// reproducible. Never fails and never performs I/O.
#[must_use]
pub fn classify_description(name: &str, description: &str, category: Option<&str>) -> TagResult {
    let mut candidates: Vec<String> = Vec::new();

    if let Some(category) = category {
        candidates.extend(starter_tags(category).iter().map(|tag| (*tag).to_owned()));
    }

    candidates.extend(
        tokenize(name, MIN_NAME_TOKEN_LEN)
            .into_iter()
            .filter(|token| !is_stop_word(token)),
    );

    candidates.extend(
        tokenize(description, MIN_DESCRIPTION_TOKEN_LEN)
            .into_iter()
            .filter(|token| !is_stop_word(token) && is_domain_word(token)),
    );

    let text = format!("{name} {description}").to_lowercase();
    candidates.extend(
        PHRASE_RULES
            .iter()
            .filter(|(pattern, _)| pattern.is_match(&text))
            .map(|(_, tag)| (*tag).to_owned()),
    );

    TagResult::new(finalize(candidates))
}

/// Lowercase, drop apostrophes, split on any other punctuation, keep tokens
/// longer than `min_len` characters.
fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > min_len)
        .map(str::to_owned)
        .collect()
}

/// Dedupe ignoring case, drop out-of-bounds tags, sort by (length, text), cap.
fn finalize(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags: Vec<String> = candidates
        .into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| {
            let len = tag.chars().count();
            len > 1 && len <= MAX_TAG_LEN
        })
        .filter(|tag| seen.insert(tag.clone()))
        .collect();

    tags.sort_by(|a, b| {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
    });
    tags.truncate(MAX_TAGS);
    tags
}
