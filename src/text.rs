use crate::PUNCTUATION;

/// How raw abstract text is turned into tokens. Shared by the vocabulary
/// builder and the encoder so both see the same tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    /// Every char in here is deleted before splitting.
    pub punctuation: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            punctuation: PUNCTUATION.into(),
        }
    }
}

impl TextConfig {
    pub fn new(punctuation: impl Into<String>) -> Self {
        Self {
            punctuation: punctuation.into(),
        }
    }

    /// Lower-cases `doc` and removes the punctuation chars.
    pub fn normalize(&self, doc: &str) -> String {
        doc.to_lowercase()
            .chars()
            .filter(|c| !self.punctuation.contains(*c))
            .collect()
    }
}

/// Normalizes `doc` and splits it on whitespace.
pub fn tokens(doc: &str, config: &TextConfig) -> Vec<String> {
    config
        .normalize(doc)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[inline]
pub fn is_number(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips_punctuation() {
        let config = TextConfig::default();
        assert_eq!(
            config.normalize(r#"The (IL-6) "level" was [high]; p<0.05!"#),
            "the il-6 level was high p<005"
        );
    }

    #[test]
    fn hyphen_and_slash_survive_normalization() {
        let config = TextConfig::default();
        assert_eq!(config.normalize("Dose-dependent and/or"), "dose-dependent and/or");
    }

    #[test]
    fn tokens_split_on_any_whitespace() {
        let config = TextConfig::default();
        assert_eq!(
            tokens("Cells  were\tcultured.\nThen lysed", &config),
            vec!["cells", "were", "cultured", "then", "lysed"]
        );
    }

    #[test]
    fn custom_punctuation_set() {
        let config = TextConfig::new("-");
        assert_eq!(config.normalize("Dose-dependent."), "dosedependent.");
    }

    #[test]
    fn numbers_parse_as_floats() {
        assert!(is_number("2020"));
        assert!(is_number("3.14"));
        assert!(is_number("1e5"));
        assert!(is_number("-2"));
        assert!(!is_number("cat"));
        assert!(!is_number("p<005"));
        assert!(!is_number(""));
    }
}
