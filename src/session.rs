use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::{RejectionReason, Result, SessionError};
use crate::validation::rules::{derivation_error, is_original, normalize};
use crate::validation::{SpellChecker, WordList};

/// Locale handed to the spell checker unless configured otherwise
pub const DEFAULT_LOCALE: &str = "en";

/// A candidate that passed every check and is now part of the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedWord {
    pub word: String,
    /// Number of letters, shown next to the word in the history
    pub letters: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Active {
        root_word: String,
        /// Accepted words, most recent first
        history: Vec<String>,
    },
}

/// One game: a root word and the words derived from it so far
pub struct Session<S> {
    spell_checker: S,
    locale: String,
    rng: ChaCha8Rng,
    state: SessionState,
}

impl<S: SpellChecker> Session<S> {
    pub fn new(spell_checker: S, locale: &str) -> Self {
        Self::with_rng(spell_checker, locale, ChaCha8Rng::from_entropy())
    }

    /// Same seed, same sequence of root words
    pub fn with_seed(spell_checker: S, locale: &str, seed: u64) -> Self {
        Self::with_rng(spell_checker, locale, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(spell_checker: S, locale: &str, rng: ChaCha8Rng) -> Self {
        Self {
            spell_checker,
            locale: locale.to_string(),
            rng,
            state: SessionState::Uninitialized,
        }
    }

    /// Pick a new root word uniformly at random and clear the history.
    ///
    /// On an empty list the current state, if any, is left untouched.
    pub fn start_session(&mut self, words: &[String]) -> Result<&str> {
        let root_word = words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SessionError::EmptyWordList)?;

        info!("New session started with root word '{}'", root_word);

        self.state = SessionState::Active {
            root_word,
            history: Vec::new(),
        };

        Ok(self.root_word().unwrap_or_default())
    }

    pub fn start_with(&mut self, list: &WordList) -> Result<&str> {
        self.start_session(list.words())
    }

    /// Run a raw submission through the checks in order:
    /// empty, duplicate, dictionary, derivable.
    /// Only an accepted word changes the session.
    pub fn submit_candidate(&mut self, raw: &str) -> Result<AcceptedWord> {
        let SessionState::Active { root_word, history } = &mut self.state else {
            return Err(SessionError::NotStarted.into());
        };

        let candidate = normalize(raw);

        let rejection = if candidate.is_empty() {
            Some(RejectionReason::Empty)
        } else if !is_original(&candidate, history) {
            Some(RejectionReason::Duplicate(candidate.clone()))
        } else if !self.spell_checker.is_valid_word(&candidate, &self.locale) {
            Some(RejectionReason::NotAWord(candidate.clone()))
        } else {
            derivation_error(&candidate, root_word)
        };

        if let Some(reason) = rejection {
            debug!("Rejected '{}': {}", candidate, reason);
            return Err(reason.into());
        }

        info!("Accepted '{}' from root word '{}'", candidate, root_word);

        let accepted = AcceptedWord {
            letters: candidate.chars().count(),
            word: candidate.clone(),
        };
        history.insert(0, candidate);

        Ok(accepted)
    }

    /// Whether the submission would be refused as a duplicate. Changes nothing.
    pub fn is_repeat(&self, raw: &str) -> bool {
        let candidate = normalize(raw);
        !candidate.is_empty() && !is_original(&candidate, self.history())
    }

    /// Accepted words, most recent first
    pub fn history(&self) -> &[String] {
        match &self.state {
            SessionState::Active { history, .. } => history,
            SessionState::Uninitialized => &[],
        }
    }

    pub fn root_word(&self) -> Option<&str> {
        match &self.state {
            SessionState::Active { root_word, .. } => Some(root_word),
            SessionState::Uninitialized => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}
