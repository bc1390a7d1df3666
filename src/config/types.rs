// Configuration type definitions

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::matcher::DEFAULT_MAX_RESULTS;

const DEFAULT_MAX: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_RESULTS) {
    Some(n) => n,
    None => panic!("DEFAULT_MAX_RESULTS must be non-zero"),
};

fn default_max_results() -> NonZeroUsize {
    DEFAULT_MAX
}

/// Typeahead behaviour section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TypeaheadConfig {
    /// Upper bound on the number of rows in the dropdown
    #[serde(default = "default_max_results")]
    pub max_results: NonZeroUsize,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        TypeaheadConfig {
            max_results: DEFAULT_MAX,
        }
    }
}

impl TypeaheadConfig {
    pub fn with_max_results(max_results: NonZeroUsize) -> Self {
        TypeaheadConfig { max_results }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub typeahead: TypeaheadConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_max_results_is_six() {
        assert_eq!(TypeaheadConfig::default().max_results.get(), 6);
    }

    #[test]
    fn test_zero_max_results_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[typeahead]\nmax_results = 0\n");
        assert!(config.is_err());
    }

    #[test]
    fn test_negative_max_results_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[typeahead]\nmax_results = -3\n");
        assert!(config.is_err());
    }

    // Any positive cap in the config file is parsed as-is.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_positive_max_results_parse(max in 1usize..10_000) {
            let toml_content = format!("[typeahead]\nmax_results = {}\n", max);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse max_results = {}", max);
            prop_assert_eq!(config.unwrap().typeahead.max_results.get(), max);
        }
    }

    // Missing sections or fields fall back to defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(include_section in prop::bool::ANY) {
            let toml_content = if include_section {
                "[typeahead]\n".to_string()
            } else {
                String::new()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok());
            prop_assert_eq!(config.unwrap(), Config::default());
        }
    }
}
