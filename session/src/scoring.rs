//! Position-wise likeness between candidate words and the end-of-run report.

use std::fmt;

use serde::{Deserialize, Serialize};
use terminal_hack_core::{DifficultyTier, WordCount, WordLength};

/// Counts positions where `candidate` and `answer` hold the same character.
///
/// Comparison stops at the shorter word; this is not an edit distance.
#[must_use]
pub fn similarity(candidate: &str, answer: &str) -> u32 {
    candidate
        .chars()
        .zip(answer.chars())
        .filter(|(left, right)| left == right)
        .count() as u32
}

/// Likeness of one candidate word against the hidden answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordScore {
    /// Candidate word as displayed.
    pub word: String,
    /// Matching character positions.
    pub similarity: u32,
    /// Characters per word.
    pub length: WordLength,
}

impl fmt::Display for WordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.word, self.similarity, self.length)
    }
}

/// Serializable snapshot of a session handed to presentation layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Lock difficulty the session was generated for.
    pub tier: DifficultyTier,
    /// Validated player skill.
    pub player_skill: u32,
    /// Characters per candidate word.
    pub word_length: WordLength,
    /// Number of candidate words.
    pub word_count: WordCount,
    /// Filler glyphs in display order.
    pub noise: String,
    /// Candidate words in draw order with their likeness to the answer.
    pub scores: Vec<WordScore>,
    /// Guesses left before the terminal locks.
    pub attempts_remaining: u32,
}

impl SessionReport {
    /// One `<word> <similarity>/<length>` line per candidate.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.scores.iter().map(ToString::to_string).collect()
    }
}
