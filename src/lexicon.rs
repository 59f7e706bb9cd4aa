use crate::config::Config;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::LazyLock;

// Entry order is the matching order: the first suffix that matches as a
// trailing whole word wins, so compound entries ("company inc",
// "חברה בעמ") must precede the shorter entries they contain.
static LEGAL_SUFFIXES: LazyLock<IndexMap<&'static str, Vec<&'static str>>> = LazyLock::new(|| {
    IndexMap::from([
        (
            "en",
            vec![
                "company inc",
                "inc",
                "llc",
                "corp",
                "ltd",
                "llp",
                "plc",
                "corporation",
                "limited",
                "company",
            ],
        ),
        ("fr", vec!["sa", "sarl", "sas"]),
        ("es", vec!["sa", "sl", "sau", "slne"]),
        ("pt", vec!["lda", "ltda", "sa", "me"]),
        ("de", vec!["gmbh", "ag", "kg", "ug"]),
        ("it", vec!["srl", "spa", "snc", "sas"]),
        ("ru", vec!["ооо", "зао", "оао", "ao"]),
        ("zh", vec!["有限公司", "集团", "公司"]),
        ("ja", vec!["株式会社", "有限会社"]),
        ("ko", vec!["유한회사", "주식회사"]),
        ("he", vec!["חברה בעמ", "בעמ"]),
        ("ar", vec!["شذمم", "ش.م.م", "مؤسسة", "شركة"]),
    ])
});

static NOISE_WORDS: LazyLock<IndexMap<&'static str, Vec<&'static str>>> = LazyLock::new(|| {
    IndexMap::from([
        ("en", vec!["the", "of", "and"]),
        ("fr", vec!["le", "la", "les", "de", "et"]),
        ("es", vec!["el", "la", "los", "de", "y"]),
        ("pt", vec!["o", "a", "os", "as", "de", "e"]),
        ("de", vec!["der", "die", "das", "und", "von"]),
        ("it", vec!["il", "la", "lo", "gli", "dei", "e"]),
        ("ru", vec!["и", "из", "в"]),
        ("zh", vec![]),
        ("ja", vec![]),
        ("ko", vec![]),
        ("he", vec!["של", "ו"]),
        ("ar", vec!["و", "من", "ال"]),
    ])
});

/// Ordered legal-suffix list for a language: built-in entries first, then
/// any config-supplied extras in their declared order. Unknown languages
/// yield an empty list.
pub fn legal_suffixes(lang: &str, config: &Config) -> Vec<String> {
    let mut out: Vec<String> = LEGAL_SUFFIXES
        .get(lang)
        .map(|entries| entries.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();
    if let Some(extras) = config.extra_suffixes.get(lang) {
        out.extend(extras.iter().cloned());
    }
    out
}

/// Noise-word set for a language, unioned with any config-supplied extras.
/// Unknown languages yield an empty set.
pub fn noise_words(lang: &str, config: &Config) -> HashSet<String> {
    let mut out: HashSet<String> = NOISE_WORDS
        .get(lang)
        .map(|entries| entries.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();
    if let Some(extras) = config.extra_noise_words.get(lang) {
        out.extend(extras.iter().map(|s| s.to_lowercase()));
    }
    out
}
