use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Language code selecting the suffix and noise-word lexicons.
    #[serde(default = "default_language")]
    pub language: String,

    /// Synthesize an acronym from word initials when none was extracted.
    #[serde(default = "default_synthesize_acronym")]
    pub synthesize_acronym: bool,

    /// Minimum token count before synthesis is attempted.
    #[serde(default = "default_acronym_word_threshold")]
    pub acronym_word_threshold: usize,

    /// Extra legal suffixes per language, appended after the built-in
    /// entries in declared order.
    #[serde(default)]
    pub extra_suffixes: IndexMap<String, Vec<String>>,

    /// Extra noise words per language, unioned with the built-in set.
    #[serde(default)]
    pub extra_noise_words: IndexMap<String, Vec<String>>,
}

fn default_language() -> String {
    "en".to_string()
}
fn default_synthesize_acronym() -> bool {
    true
}
fn default_acronym_word_threshold() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language: "en".to_string(),
            synthesize_acronym: true,
            acronym_word_threshold: 3,
            extra_suffixes: IndexMap::new(),
            extra_noise_words: IndexMap::new(),
        }
    }
}
