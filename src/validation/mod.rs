pub mod dictionary;
pub mod rules;
pub mod word_list;

// Re-export common types
pub use dictionary::{DictionaryValidator, SpellChecker};
pub use rules::{derivation_error, find_underivable, is_derivable, is_original, normalize};
pub use word_list::WordList;
