use dotenvy::dotenv;
use std::env;
use tracing::info;

use crate::session::DEFAULT_LOCALE;
use crate::Error;

pub struct Config {
    /// `None` means the word list bundled with the binary
    pub word_list_path: Option<String>,
    pub dictionary_path: String,
    pub dictionary_locale: String,
    pub seed: Option<u64>,
}

impl Config {
    /// Build the configuration from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let word_list_path = lookup("WORD_LIST_PATH").filter(|path| !path.trim().is_empty());

        let dictionary_path =
            lookup("DICTIONARY_FILE_PATH").unwrap_or_else(|| "./data/words.txt".to_string());

        let dictionary_locale =
            lookup("DICTIONARY_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let seed = lookup("WORD_SCRAMBLE_SEED")
            .map(|seed| {
                seed.trim()
                    .parse::<u64>()
                    .map_err(|_| Error::Config(format!("Invalid WORD_SCRAMBLE_SEED '{}'", seed)))
            })
            .transpose()?;

        Ok(Config {
            word_list_path,
            dictionary_path,
            dictionary_locale,
            seed,
        })
    }
}

pub fn load_config() -> miette::Result<Config> {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    Ok(Config::from_lookup(|key| env::var(key).ok())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.word_list_path, None);
        assert_eq!(config.dictionary_path, "./data/words.txt");
        assert_eq!(config.dictionary_locale, "en");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("WORD_LIST_PATH", "/tmp/start.txt"),
            ("DICTIONARY_FILE_PATH", "/usr/share/dict/words"),
            ("DICTIONARY_LOCALE", "en_GB"),
            ("WORD_SCRAMBLE_SEED", " 1234 "),
        ]))
        .unwrap();

        assert_eq!(config.word_list_path.as_deref(), Some("/tmp/start.txt"));
        assert_eq!(config.dictionary_path, "/usr/share/dict/words");
        assert_eq!(config.dictionary_locale, "en_GB");
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn test_blank_word_list_path_means_embedded() {
        let config = Config::from_lookup(lookup(&[("WORD_LIST_PATH", "  ")])).unwrap();
        assert_eq!(config.word_list_path, None);
    }

    #[test]
    fn test_invalid_seed() {
        let result = Config::from_lookup(lookup(&[("WORD_SCRAMBLE_SEED", "abc")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
