use miette::SourceSpan;
use std::collections::HashMap;

use crate::error::RejectionReason;

/// Lowercase and trim a raw submission before any check runs on it
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True if the candidate has not been accepted before (case-insensitive)
pub fn is_original(candidate: &str, history: &[String]) -> bool {
    let candidate = candidate.to_lowercase();
    !history.iter().any(|used| used.to_lowercase() == candidate)
}

/// True if every letter of the candidate can be taken from the root word,
/// each root letter being usable at most once
pub fn is_derivable(candidate: &str, root: &str) -> bool {
    find_underivable(candidate, root).is_none()
}

/// Walk the candidate consuming letters from the root word, ignoring case on both sides.
/// Returns the byte offset and the letter of the first one the root cannot supply.
pub fn find_underivable(candidate: &str, root: &str) -> Option<(usize, char)> {
    let mut remaining = letter_counts(&root.to_lowercase());

    for (offset, letter) in candidate.char_indices() {
        for lower in letter.to_lowercase() {
            match remaining.get_mut(&lower) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return Some((offset, letter)),
            }
        }
    }

    None
}

/// Build the `NotDerivable` rejection for a candidate, or `None` if it is derivable
pub fn derivation_error(candidate: &str, root: &str) -> Option<RejectionReason> {
    find_underivable(candidate, root).map(|(offset, letter)| RejectionReason::NotDerivable {
        word: candidate.to_string(),
        span: SourceSpan::from((offset, letter.len_utf8())),
        root: root.to_string(),
    })
}

fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for letter in word.chars() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}
