use crate::config::Config;
use crate::lexicon;
use regex::Regex;

/// Remove one trailing legal suffix from an already punctuation-normalized
/// name. The lexicon is scanned in declared order and the first entry that
/// matches as a trailing whole word is removed; detection and removal use
/// the same case-insensitive regex on the same string, so a detected suffix
/// is always the one removed. Unknown languages pass the name through.
pub fn remove_legal_suffix(name: &str, config: &Config) -> String {
    for suffix in lexicon::legal_suffixes(&config.language, config) {
        let re = Regex::new(&format!(r"(?i)\b{}$", regex::escape(&suffix))).unwrap();
        if re.is_match(name) {
            return re.replace(name, "").trim().to_string();
        }
    }
    name.to_string()
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
    fn test_trailing_suffix_removed() {
        assert_eq!(remove_legal_suffix("Acme Inc", &lang("en")), "Acme");
    }

    #[test]
    fn test_original_case_preserved() {
        assert_eq!(
            remove_legal_suffix("Siemens GmbH", &lang("de")),
            "Siemens"
        );
    }

    #[test]
    fn test_compound_entry_wins_over_substring() {
        assert_eq!(
            remove_legal_suffix("Hewlett-Packard Company Inc", &lang("en")),
            "Hewlett-Packard"
        );
    }

    #[test]
    fn test_at_most_one_removal() {
        assert_eq!(
            remove_legal_suffix("Acme Limited Corp", &lang("en")),
            "Acme Limited"
        );
    }

    #[test]
    fn test_fused_suffix_not_removed() {
        // "inc" is a substring but not a trailing whole word
        assert_eq!(remove_legal_suffix("Brinc", &lang("en")), "Brinc");
        assert_eq!(remove_legal_suffix("Mosaic", &lang("en")), "Mosaic");
    }

    #[test]
    fn test_non_trailing_suffix_not_removed() {
        assert_eq!(
            remove_legal_suffix("Inc Acme Holdings", &lang("en")),
            "Inc Acme Holdings"
        );
    }

    #[test]
    fn test_unknown_language_is_noop() {
        assert_eq!(remove_legal_suffix("Acme Inc", &lang("xx")), "Acme Inc");
    }

    #[test]
    fn test_cyrillic_suffix_case_insensitive() {
        assert_eq!(remove_legal_suffix("Газпром ООО", &lang("ru")), "Газпром");
    }

    #[test]
    fn test_cjk_suffix_after_space() {
        assert_eq!(
            remove_legal_suffix("阿里巴巴 有限公司", &lang("zh")),
            "阿里巴巴"
        );
    }

    #[test]
    fn test_extra_suffix_from_config() {
        let mut config = lang("nl");
        config
            .extra_suffixes
            .insert("nl".to_string(), vec!["bv".to_string()]);
        assert_eq!(remove_legal_suffix("Philips BV", &config), "Philips");
    }
}
