pub mod acronym;
pub mod config;
pub mod extract;
pub mod lexicon;
pub mod noise;
pub mod normalize;
pub mod suffix;

use config::Config;
use regex::Regex;
use std::sync::LazyLock;

static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize an organization name into its canonical abbreviated form.
///
/// Stages run in a fixed order: extract a valid trailing parenthesized
/// acronym, decompose Unicode and clean punctuation, remove one trailing
/// legal suffix, drop noise words, then synthesize an acronym from word
/// initials when none was extracted and synthesis is enabled. Ampersands
/// are stripped from the final name. Pure function of the input and the
/// config; empty input yields empty output.
pub fn abbreviate(name: &str, config: &Config) -> String {
    if name.is_empty() {
        return String::new();
    }

    // Stage 1
    let (name, existing_acronym) = extract::extract_acronym(name);

    // Stage 2
    let name = normalize::normalize(&name);

    // Stage 3
    let name = suffix::remove_legal_suffix(&name, config);

    // Stage 4
    let name = noise::filter_noise_words(&name, config);

    // Stage 5
    let acronym = if existing_acronym.is_some() {
        existing_acronym
    } else if config.synthesize_acronym {
        acronym::synthesize(&name, config.acronym_word_threshold)
    } else {
        None
    };

    let name = name.replace('&', "");
    let name = RE_SPACES.replace_all(&name, " ").trim().to_string();

    match acronym {
        Some(a) => format!("{} ({})", name, a),
        None => name,
    }
}
