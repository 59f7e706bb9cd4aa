use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

// \w is Unicode-aware and includes combining marks, so NFD output keeps its
// marks through the punctuation pass.
static RE_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s&-]+").unwrap());
static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Canonical decomposition (NFD) followed by punctuation cleanup: anything
/// that is not a word character, whitespace, ampersand, or hyphen becomes a
/// space, underscores become spaces, whitespace runs collapse to one space.
pub fn normalize(text: &str) -> String {
    let text: String = text.nfd().collect();
    let text = RE_PUNCT.replace_all(&text, " ");
    let text = text.replace('_', " ");
    let text = RE_SPACES.replace_all(&text, " ");
    text.trim().to_string()
}
