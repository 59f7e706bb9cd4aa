use crate::config::Config;
use crate::lexicon;
use regex::Regex;
use std::sync::LazyLock;

static RE_TOKEN_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \-&]+").unwrap());

/// Split a name into tokens for noise filtering and acronym logic: runs of
/// space, hyphen, or ampersand are delimiters.
pub fn tokens(name: &str) -> Vec<&str> {
    RE_TOKEN_SPLIT.split(name).filter(|t| !t.is_empty()).collect()
}

/// Drop tokens whose lowercased form is in the language's noise-word set.
/// When nothing is dropped the name is returned untouched, separators and
/// all; only an actual removal re-joins the survivors with single spaces.
pub fn filter_noise_words(name: &str, config: &Config) -> String {
    let noise = lexicon::noise_words(&config.language, config);
    if noise.is_empty() {
        return name.to_string();
    }
    let all = tokens(name);
    let kept: Vec<&str> = all
        .iter()
        .copied()
        .filter(|t| !noise.contains(&t.to_lowercase()))
        .collect();
    if kept.len() == all.len() {
        return name.to_string();
    }
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str) -> Config {
        Config {
            language: code.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_noise_words_dropped() {
        assert_eq!(
            filter_noise_words("Bank of America", &lang("en")),
            "Bank America"
        );
    }

    #[test]
    fn test_case_insensitive_membership() {
        assert_eq!(
            filter_noise_words("The Acme Group", &lang("en")),
            "Acme Group"
        );
    }

    #[test]
    fn test_untouched_name_keeps_separators() {
        assert_eq!(
            filter_noise_words("Hewlett-Packard", &lang("en")),
            "Hewlett-Packard"
        );
        assert_eq!(
            filter_noise_words("Johnson & Johnson", &lang("en")),
            "Johnson & Johnson"
        );
    }

    #[test]
    fn test_removal_rejoins_with_spaces() {
        assert_eq!(
            filter_noise_words("Grupo de Industrias Unidas", &lang("es")),
            "Grupo Industrias Unidas"
        );
    }

    #[test]
    fn test_unknown_language_is_noop() {
        assert_eq!(
            filter_noise_words("The Acme Group", &lang("xx")),
            "The Acme Group"
        );
    }

    #[test]
    fn test_german_noise_words() {
        assert_eq!(
            filter_noise_words("Institut für Technik und Wissenschaft", &lang("de")),
            "Institut für Technik Wissenschaft"
        );
    }

    #[test]
    fn test_tokens_split_on_space_hyphen_ampersand() {
        assert_eq!(
            tokens("Hewlett-Packard & Friends Co"),
            vec!["Hewlett", "Packard", "Friends", "Co"]
        );
    }
}
