use crate::noise;
use regex::Regex;
use std::sync::LazyLock;

static RE_UPPER_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2,}$").unwrap());

/// Build an acronym from the uppercased first character of each token of a
/// cleaned name. Returns `None` below the token threshold, and `None` when
/// any token is already an all-uppercase run of 2+ letters so that names
/// carrying an acronym-like token are not abbreviated twice.
pub fn synthesize(name: &str, threshold: usize) -> Option<String> {
    let words = noise::tokens(name);
    if words.len() < threshold {
        return None;
    }
    if words.iter().any(|w| RE_UPPER_RUN.is_match(w)) {
        return None;
    }
    let acronym: String = words
        .iter()
        .filter(|w| **w != "&")
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    Some(acronym)
}
