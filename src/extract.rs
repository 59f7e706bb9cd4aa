use regex::Regex;
use std::sync::LazyLock;

static RE_TRAILING_ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Z]{2,6})\)\s*$").unwrap());
static RE_STRIP_ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([A-Z]{2,6}\)\s*$").unwrap());
static RE_FIRST_LATIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]").unwrap());

/// Detect and strip a trailing parenthesized acronym of 2-6 uppercase
/// letters. The candidate is accepted only when its first letter matches the
/// uppercased first Latin letter of the name, which keeps unrelated trailing
/// parentheticals (years, country codes) out of the acronym slot.
pub fn extract_acronym(name: &str) -> (String, Option<String>) {
    if let Some(caps) = RE_TRAILING_ACRONYM.captures(name) {
        let acronym = &caps[1];
        if let Some(first) = RE_FIRST_LATIN.find(name) {
            let initial = first.as_str().to_ascii_uppercase();
            if acronym.starts_with(&initial) {
                let stripped = RE_STRIP_ACRONYM.replace(name, "");
                return (stripped.trim().to_string(), Some(acronym.to_string()));
            }
        }
    }
    (name.trim().to_string(), None)
}
