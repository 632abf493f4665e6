//! Guess outcomes and the session's lock state.

use serde::{Deserialize, Serialize};

/// Whether a session still accepts guesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Guesses are accepted.
    Active,
    /// The answer was guessed.
    AccessGranted,
    /// Attempts ran out.
    LockedOut,
}

impl SessionState {
    /// Reports whether the session has ended.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Result of submitting a candidate word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guess matched the answer.
    AccessGranted,
    /// The guess was wrong; attempts remain.
    Denied {
        /// Matching positions between guess and answer.
        likeness: u32,
        /// Guesses left after this one.
        attempts_remaining: u32,
    },
    /// The guess was wrong and used the last attempt.
    LockedOut {
        /// Matching positions between guess and answer.
        likeness: u32,
    },
}
