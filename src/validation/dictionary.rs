use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{DictionaryError, Result};

/// Anything that can tell whether a word is spelled correctly in a locale
pub trait SpellChecker {
    fn is_valid_word(&self, word: &str, locale: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_valid_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_valid_word(word, locale)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Box<T> {
    fn is_valid_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_valid_word(word, locale)
    }
}

/// Spell checker backed by a word list held in memory
pub struct DictionaryValidator {
    words: HashSet<String>,
    locale: String,
}

impl DictionaryValidator {
    pub fn new(dictionary_path: &str, locale: &str) -> Result<Self> {
        info!("Loading {} dictionary from {}", locale, dictionary_path);

        let file = File::open(Path::new(dictionary_path)).map_err(DictionaryError::Load)?;
        let reader = io::BufReader::new(file);

        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(DictionaryError::Load)?;
            let word = line.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }

        let validator = Self::from_words(words, locale)?;
        info!("Loaded {} words from dictionary", validator.len());
        Ok(validator)
    }

    pub fn from_words<I, S>(words: I, locale: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty.into());
        }

        Ok(Self {
            words,
            locale: locale.to_string(),
        })
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn supports(&self, locale: &str) -> bool {
        primary_language(locale).eq_ignore_ascii_case(primary_language(&self.locale))
    }
}

impl SpellChecker for DictionaryValidator {
    fn is_valid_word(&self, word: &str, locale: &str) -> bool {
        if !self.supports(locale) {
            debug!(
                "Dictionary for '{}' cannot check words in '{}'",
                self.locale, locale
            );
            return false;
        }

        let word = word.trim().to_lowercase();
        self.words.contains(&word)
    }
}

/// "en" for "en", "en_US" and "en-GB"
fn primary_language(locale: &str) -> &str {
    locale.split(['_', '-']).next().unwrap_or(locale)
}
