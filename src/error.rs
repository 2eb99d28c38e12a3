use miette::{Diagnostic, SourceSpan};
use std::io;
use thiserror::Error;

/// Primary error type for the word scramble game
#[derive(Error, Debug, Diagnostic)]
pub enum GameError {
    #[error("Environment configuration error: {0}")]
    #[diagnostic(code(word_scramble::config_error))]
    Config(String),

    #[error("Word list error: {0}")]
    #[diagnostic(code(word_scramble::word_list_error))]
    WordList(#[from] WordListError),

    #[error("Dictionary error: {0}")]
    #[diagnostic(code(word_scramble::dictionary_error))]
    Dictionary(#[from] DictionaryError),

    #[error("Session error: {0}")]
    #[diagnostic(code(word_scramble::session_error))]
    Session(#[from] SessionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Rejected(#[from] RejectionReason),

    #[error("Actor system error: {0}")]
    #[diagnostic(code(word_scramble::actor_error))]
    Actor(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(word_scramble::io_error))]
    Io(#[from] io::Error),
}

impl GameError {
    /// The rejection carried by this error, if the candidate was simply refused
    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            GameError::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Root word list errors
#[derive(Error, Debug, Diagnostic)]
pub enum WordListError {
    #[error("Failed to load word list: {0}")]
    #[diagnostic(code(word_scramble::word_list::load_error))]
    Load(#[from] io::Error),

    #[error("Word list has no entries")]
    #[diagnostic(
        code(word_scramble::word_list::empty),
        help("the word list needs at least one non-blank line")
    )]
    Empty,
}

/// Dictionary-specific errors
#[derive(Error, Debug, Diagnostic)]
pub enum DictionaryError {
    #[error("Failed to load dictionary file: {0}")]
    #[diagnostic(code(word_scramble::dictionary::load_error))]
    Load(#[from] io::Error),

    #[error("Dictionary is empty")]
    #[diagnostic(code(word_scramble::dictionary::empty))]
    Empty,
}

/// Structural faults: the session cannot be used at all
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Cannot start a session from an empty word list")]
    #[diagnostic(code(word_scramble::session::empty_word_list))]
    EmptyWordList,

    #[error("No session has been started")]
    #[diagnostic(code(word_scramble::session::not_started))]
    NotStarted,
}

/// Why a candidate was refused. The player just tries another word.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Candidate is empty")]
    #[diagnostic(code(word_scramble::rejected::empty))]
    Empty,

    #[error("'{0}' has been used already")]
    #[diagnostic(code(word_scramble::rejected::duplicate))]
    Duplicate(String),

    #[error("'{0}' is not a recognised word")]
    #[diagnostic(code(word_scramble::rejected::not_a_word))]
    NotAWord(String),

    #[error("'{word}' cannot be spelled from the letters of '{root}'")]
    #[diagnostic(code(word_scramble::rejected::not_derivable))]
    NotDerivable {
        #[source_code]
        word: String,

        #[label("no letter left for this")]
        span: SourceSpan,

        root: String,
    },
}

impl RejectionReason {
    /// Short heading shown to the player
    pub fn title(&self) -> &'static str {
        match self {
            RejectionReason::Empty => "",
            RejectionReason::Duplicate(_) => "Word used already",
            RejectionReason::NotAWord(_) => "Word not recognized",
            RejectionReason::NotDerivable { .. } => "Word not possible",
        }
    }

    /// Longer explanation shown under the title
    pub fn message(&self) -> String {
        match self {
            RejectionReason::Empty => String::new(),
            RejectionReason::Duplicate(_) => "Be more original".to_string(),
            RejectionReason::NotAWord(_) => "That is not a real word".to_string(),
            RejectionReason::NotDerivable { root, .. } => {
                format!("You can't spell that word from '{}'", root)
            }
        }
    }

    /// Empty submissions are swallowed by the UI rather than reported
    pub fn is_silent(&self) -> bool {
        matches!(self, RejectionReason::Empty)
    }
}

// Re-export error types for convenience
pub use GameError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_text() {
        let reason = RejectionReason::NotDerivable {
            word: "worms".to_string(),
            span: SourceSpan::from((4, 1)),
            root: "silkworm".to_string(),
        };
        assert_eq!(reason.title(), "Word not possible");
        assert_eq!(reason.message(), "You can't spell that word from 'silkworm'");
        assert_eq!(
            reason.to_string(),
            "'worms' cannot be spelled from the letters of 'silkworm'"
        );

        assert!(RejectionReason::Empty.is_silent());
        assert!(!RejectionReason::Duplicate("silk".to_string()).is_silent());
    }

    #[test]
    fn test_rejection_accessor() {
        let err: Error = RejectionReason::NotAWord("xyz".to_string()).into();
        assert_eq!(
            err.rejection(),
            Some(&RejectionReason::NotAWord("xyz".to_string()))
        );

        let err: Error = SessionError::NotStarted.into();
        assert!(err.rejection().is_none());
    }
}
