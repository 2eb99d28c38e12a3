pub mod session;

// Re-export actor types for easier import
pub use session::{GetHistory, GetRootWord, SessionActor, StartSession, SubmitCandidate};
