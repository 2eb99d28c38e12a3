use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Result, WordListError};

/// Root words bundled with the binary, one per line
pub const EMBEDDED_WORD_LIST: &str = include_str!("../../data/start.txt");

/// The ordered pool a session draws its root word from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Split line-delimited text into root words. Blank lines are dropped.
    pub fn parse(text: &str) -> Result<Self> {
        let words: Vec<String> = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty.into());
        }

        Ok(Self { words })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading word list from {}", path.display());

        let text = fs::read_to_string(path).map_err(WordListError::Load)?;
        let list = Self::parse(&text)?;

        info!("Loaded {} root words", list.words().len());
        Ok(list)
    }

    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_WORD_LIST)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}
