pub mod actors;
pub mod config;
pub mod error;
pub mod session;
pub mod shell;
pub mod validation;

// Re-export error types for convenience
pub use error::{DictionaryError, Error, RejectionReason, Result, SessionError, WordListError};
pub use session::{AcceptedWord, Session};
