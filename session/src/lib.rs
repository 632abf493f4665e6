#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Puzzle sessions: one-pass construction, likeness scoring and guess tracking.
//!
//! A [`PuzzleSession`] owns its generator and builds every derived field
//! eagerly. Draws are consumed in a fixed order that forms the
//! reproducibility contract:
//!
//! 1. one draw selects the word length (before skill validation),
//! 2. one draw selects the answer index,
//! 3. one draw per noise glyph,
//! 4. rejection-sampling draws for the candidate words.
//!
//! Construction is all-or-nothing. Afterwards only the attempt counter and
//! lock state change, through [`PuzzleSession::submit_guess`].

mod guess;
mod scoring;

use terminal_hack_core::{
    DifficultyTier, EngineError, GuessError, WordCount, WordLength, WordTable, DEFAULT_ATTEMPTS,
};
use terminal_hack_system_difficulty::derive_parameters;
use terminal_hack_system_noise::{NoiseBuffer, NoiseStream};
use terminal_hack_system_rng::{SeedSource, Xoroshiro128};
use terminal_hack_system_word_sampling::{CanonicalWords, WordSampler};

pub use guess::{GuessOutcome, SessionState};
pub use scoring::{similarity, SessionReport, WordScore};
pub use terminal_hack_system_word_sampling::Config as SamplingConfig;

/// Configuration parameters required to construct a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    initial_attempts: u32,
    sampling: SamplingConfig,
}

impl SessionConfig {
    /// Creates a configuration granting `initial_attempts` guesses.
    #[must_use]
    pub const fn new(initial_attempts: u32, sampling: SamplingConfig) -> Self {
        Self {
            initial_attempts,
            sampling,
        }
    }

    /// Guesses granted before the terminal locks.
    #[must_use]
    pub const fn initial_attempts(&self) -> u32 {
        self.initial_attempts
    }

    /// Word sampler configuration.
    #[must_use]
    pub const fn sampling(&self) -> SamplingConfig {
        self.sampling
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPTS, SamplingConfig::default())
    }
}

/// One generated terminal puzzle.
#[derive(Clone, Debug)]
pub struct PuzzleSession {
    tier: DifficultyTier,
    player_skill: u32,
    word_length: WordLength,
    word_count: WordCount,
    length_draw: u64,
    answer_index: usize,
    noise: NoiseBuffer,
    words: Vec<String>,
    attempts_remaining: u32,
    state: SessionState,
}

impl PuzzleSession {
    /// Generates a session from a 64-bit seed using the canonical word tables.
    pub fn generate(
        tier: DifficultyTier,
        player_skill: u32,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::generate_with(
            tier,
            player_skill,
            Xoroshiro128::from_seed(seed),
            &CanonicalWords,
            SessionConfig::default(),
        )
    }

    /// Generates a session seeded by `source` using the canonical word tables.
    pub fn from_source(
        tier: DifficultyTier,
        player_skill: u32,
        source: &impl SeedSource,
    ) -> Result<Self, EngineError> {
        Self::generate(tier, player_skill, source.seed())
    }

    /// Generates a session from a ready generator, table and configuration.
    ///
    /// The generator is moved in; callers wanting several sessions from one
    /// stream should hand each a [`Xoroshiro128::fork`].
    pub fn generate_with(
        tier: DifficultyTier,
        player_skill: u32,
        mut rng: Xoroshiro128,
        table: &impl WordTable,
        config: SessionConfig,
    ) -> Result<Self, EngineError> {
        let parameters = derive_parameters(tier, player_skill, &mut rng)?;
        let word_length = parameters.length();
        let word_count = parameters.count();

        let answer_index = rng.next_below(u64::from(word_count.get())) as usize;
        let noise = NoiseStream::default().generate(&mut rng);
        let words = WordSampler::new(config.sampling()).sample(
            table,
            word_length,
            word_count,
            &mut rng,
        )?;

        log::debug!(
            "generated {tier} session: {word_count} words of length {word_length}, answer #{answer_index}"
        );

        Ok(Self {
            tier,
            player_skill,
            word_length,
            word_count,
            length_draw: parameters.length_draw(),
            answer_index,
            noise,
            words,
            attempts_remaining: config.initial_attempts(),
            state: SessionState::Active,
        })
    }

    /// Lock difficulty of the terminal.
    #[must_use]
    pub const fn tier(&self) -> DifficultyTier {
        self.tier
    }

    /// Validated player skill.
    #[must_use]
    pub const fn player_skill(&self) -> u32 {
        self.player_skill
    }

    /// Characters per candidate word.
    #[must_use]
    pub const fn word_length(&self) -> WordLength {
        self.word_length
    }

    /// Number of candidate words.
    #[must_use]
    pub const fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// Raw generator output that selected the word length.
    #[must_use]
    pub const fn length_draw(&self) -> u64 {
        self.length_draw
    }

    /// Index of the hidden answer within [`words`](Self::words).
    #[must_use]
    pub const fn answer_index(&self) -> usize {
        self.answer_index
    }

    /// The hidden answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.words[self.answer_index]
    }

    /// Candidate words in draw order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Filler glyphs surrounding the candidates.
    #[must_use]
    pub const fn noise(&self) -> &NoiseBuffer {
        &self.noise
    }

    /// Guesses left before the terminal locks.
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Current lock state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Likeness of the candidate at `index` to the answer, if it exists.
    #[must_use]
    pub fn similarity_at(&self, index: usize) -> Option<u32> {
        self.words
            .get(index)
            .map(|word| similarity(word, self.answer()))
    }

    /// Likeness of every candidate, in draw order.
    #[must_use]
    pub fn scores(&self) -> Vec<WordScore> {
        self.words
            .iter()
            .map(|word| WordScore {
                word: word.clone(),
                similarity: similarity(word, self.answer()),
                length: self.word_length,
            })
            .collect()
    }

    /// Snapshot for presentation layers.
    #[must_use]
    pub fn report(&self) -> SessionReport {
        SessionReport {
            tier: self.tier,
            player_skill: self.player_skill,
            word_length: self.word_length,
            word_count: self.word_count,
            noise: self.noise.to_string(),
            scores: self.scores(),
            attempts_remaining: self.attempts_remaining,
        }
    }

    /// Evaluates a guess against the answer.
    ///
    /// Guesses are matched case-insensitively against the candidates. Words
    /// outside the candidate list are rejected without costing an attempt.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GuessError> {
        if self.state.is_closed() {
            return Err(GuessError::SessionClosed);
        }

        let normalized = guess.trim().to_ascii_uppercase();
        if !self.words.iter().any(|word| *word == normalized) {
            return Err(GuessError::UnknownWord(normalized));
        }

        if normalized == self.answer() {
            self.state = SessionState::AccessGranted;
            log::debug!("access granted with {} attempts left", self.attempts_remaining);
            return Ok(GuessOutcome::AccessGranted);
        }

        let likeness = similarity(&normalized, self.answer());
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        if self.attempts_remaining == 0 {
            self.state = SessionState::LockedOut;
            log::debug!("terminal locked after guessing {normalized}");
            return Ok(GuessOutcome::LockedOut { likeness });
        }

        Ok(GuessOutcome::Denied {
            likeness,
            attempts_remaining: self.attempts_remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_state_session() -> PuzzleSession {
        PuzzleSession::generate_with(
            DifficultyTier::Easy,
            65,
            Xoroshiro128::default(),
            &CanonicalWords,
            SessionConfig::default(),
        )
        .expect("valid session")
    }

    #[test]
    fn answer_is_fully_similar_to_itself() {
        let session = unit_state_session();
        assert_eq!(
            session.similarity_at(session.answer_index()),
            Some(session.word_length().get())
        );
        assert_eq!(session.similarity_at(session.words().len()), None);
    }

    #[test]
    fn wrong_guess_costs_an_attempt() {
        let mut session = unit_state_session();
        let outcome = session.submit_guess("common").expect("candidate word");
        assert_eq!(
            outcome,
            GuessOutcome::Denied {
                likeness: 2,
                attempts_remaining: 3,
            }
        );
        assert_eq!(session.attempts_remaining(), 3);
    }

    #[test]
    fn unknown_word_is_free() {
        let mut session = unit_state_session();
        assert_eq!(
            session.submit_guess("PYTHON"),
            Err(GuessError::UnknownWord("PYTHON".to_owned()))
        );
        assert_eq!(session.attempts_remaining(), DEFAULT_ATTEMPTS);
    }

    #[test]
    fn correct_guess_closes_session() {
        let mut session = unit_state_session();
        let answer = session.answer().to_owned();
        assert_eq!(session.submit_guess(&answer), Ok(GuessOutcome::AccessGranted));
        assert_eq!(session.state(), SessionState::AccessGranted);
        assert_eq!(session.submit_guess(&answer), Err(GuessError::SessionClosed));
    }

    #[test]
    fn last_wrong_guess_locks_terminal() {
        let mut session = unit_state_session();
        let outcomes: Vec<GuessOutcome> = ["SECOND", "GIVING", "ACROSS", "PLACED"]
            .into_iter()
            .map(|guess| session.submit_guess(guess).expect("candidate"))
            .collect();
        assert_eq!(outcomes[3], GuessOutcome::LockedOut { likeness: 1 });
        assert_eq!(session.state(), SessionState::LockedOut);
        assert_eq!(session.attempts_remaining(), 0);
        assert_eq!(session.submit_guess("HOLMES"), Err(GuessError::SessionClosed));
    }

    struct MixedLengths;

    impl WordTable for MixedLengths {
        fn candidates(&self, _length: WordLength) -> Option<&[&str]> {
            const WORDS: [&str; 25] = [
                "ABLE", "GO", "BACK", "COLD", "ABCDEFGHIJKLMNOP", "DARK", "EAST", "UP", "FAST",
                "GOLD", "HALF", "NO", "IDEA", "JUST", "KEEP", "LAST", "QRSTUVWXYZABCDEF", "MIND",
                "NEXT", "OPEN", "PART", "ON", "REAL", "SIDE", "TRUE",
            ];
            Some(&WORDS)
        }
    }

    #[test]
    fn table_with_wrong_lengths_cannot_build_a_session() {
        let result = PuzzleSession::generate_with(
            DifficultyTier::VeryEasy,
            0,
            Xoroshiro128::default(),
            &MixedLengths,
            SessionConfig::default(),
        );
        assert_eq!(
            result.map(|session| session.answer().to_owned()),
            Err(EngineError::MalformedCandidate {
                length: WordLength::new(4),
                position: 1,
            })
        );
    }

    #[test]
    fn single_attempt_config_locks_immediately() {
        let config = SessionConfig::new(1, SamplingConfig::default());
        let mut session = PuzzleSession::generate_with(
            DifficultyTier::Easy,
            65,
            Xoroshiro128::default(),
            &CanonicalWords,
            config,
        )
        .expect("valid session");
        assert_eq!(
            session.submit_guess("SECOND"),
            Ok(GuessOutcome::LockedOut { likeness: 0 })
        );
    }
}
