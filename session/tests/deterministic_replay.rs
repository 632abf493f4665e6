use std::collections::HashSet;

use terminal_hack_core::{
    DifficultyTier, EngineError, MAX_WORD_COUNT, MAX_WORD_LENGTH, MIN_WORD_COUNT, MIN_WORD_LENGTH,
    NOISE_BUFFER_LEN,
};
use terminal_hack_session::{PuzzleSession, SessionConfig, SessionReport};
use terminal_hack_system_rng::{FixedSeed, Xoroshiro128};
use terminal_hack_system_word_sampling::CanonicalWords;

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
fn unit_state_scenario_matches_reference() {
    let session = unit_state_session();

    assert_eq!(session.length_draw(), 16_384);
    assert_eq!(session.word_length().get(), 6);
    assert_eq!(session.word_count().get(), 12);
    assert_eq!(session.answer_index(), 8);
    assert_eq!(session.answer(), "HOLMES");
    assert_eq!(
        session.words(),
        [
            "SECOND", "GIVING", "ACROSS", "PLACED", "MAKING", "ANSWER", "ANDREW", "COMMON",
            "HOLMES", "WITHIN", "WANTED", "SEEING",
        ]
    );

    let noise = session.noise().to_string();
    assert!(noise.starts_with("..,@://,/;-:,?'_:$*-?/-%"), "{noise}");
    assert!(noise.ends_with(",@?,%!+,-%%."), "{noise}");
}

#[test]
fn unit_state_report_lines_match_reference() {
    let lines = unit_state_session().report().lines();
    assert_eq!(
        lines,
        [
            "SECOND 0/6",
            "GIVING 0/6",
            "ACROSS 1/6",
            "PLACED 1/6",
            "MAKING 0/6",
            "ANSWER 1/6",
            "ANDREW 1/6",
            "COMMON 2/6",
            "HOLMES 6/6",
            "WITHIN 0/6",
            "WANTED 1/6",
            "SEEING 0/6",
        ]
    );
}

#[test]
fn seeded_sessions_match_reference() {
    let easy = PuzzleSession::generate(DifficultyTier::VeryEasy, 50, 42).expect("very easy");
    assert_eq!(easy.word_length().get(), 4);
    assert_eq!(easy.word_count().get(), 12);
    assert_eq!(easy.answer(), "WILL");
    assert_eq!(
        easy.words(),
        [
            "OVER", "TAKE", "GAVE", "WILL", "DOWN", "WORK", "BOTH", "INTO", "TELL", "ALSO", "ROOM",
            "LIKE",
        ]
    );

    let hard = PuzzleSession::generate(DifficultyTier::Hard, 80, 7).expect("hard");
    assert_eq!(hard.word_length().get(), 11);
    assert_eq!(hard.word_count().get(), 17);
    assert_eq!(hard.answer_index(), 4);
    assert_eq!(hard.answer(), "TRANSFERRED");
}

#[test]
fn same_inputs_replay_bit_for_bit() {
    for tier in DifficultyTier::ALL {
        for seed in [0, 1, 0xdead_beef, u64::MAX] {
            let first = PuzzleSession::generate(tier, 100, seed).expect("first");
            let second = PuzzleSession::from_source(tier, 100, &FixedSeed::new(seed))
                .expect("second");
            assert_eq!(first.report(), second.report(), "{tier} seed {seed}");
            assert_eq!(first.answer_index(), second.answer_index());
            assert_eq!(first.length_draw(), second.length_draw());
        }
    }
}

#[test]
fn invariants_hold_across_seeds() {
    for seed in 0..300u64 {
        let tier = DifficultyTier::ALL[(seed % 5) as usize];
        let skill = tier.minimum_skill() + (seed as u32 % (101 - tier.minimum_skill()));
        let session = PuzzleSession::generate(tier, skill, seed)
            .unwrap_or_else(|error| panic!("{tier}/{skill}/{seed}: {error}"));

        let length = session.word_length().get();
        let count = session.word_count().get();
        assert!((MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length));
        assert!((MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&count));
        assert!(session.answer_index() < count as usize);
        assert_eq!(session.words().len(), count as usize);
        assert_eq!(
            session.words().iter().collect::<HashSet<_>>().len(),
            session.words().len(),
            "duplicate words for seed {seed}"
        );
        assert!(session
            .words()
            .iter()
            .all(|word| word.len() == length as usize));
        assert_eq!(session.noise().glyphs().len(), NOISE_BUFFER_LEN);
        assert_eq!(session.similarity_at(session.answer_index()), Some(length));
    }
}

#[test]
fn forked_generators_build_distinct_sessions() {
    let mut root = Xoroshiro128::from_seed(99);
    let build = |rng: Xoroshiro128| {
        PuzzleSession::generate_with(
            DifficultyTier::Average,
            60,
            rng,
            &CanonicalWords,
            SessionConfig::default(),
        )
        .expect("average session")
    };

    let first = build(root.fork());
    let second = build(root.fork());
    assert_ne!(first.noise(), second.noise());
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        PuzzleSession::generate(DifficultyTier::VeryEasy, 150, 1).map(|_| ()),
        Err(EngineError::InvalidSkill { skill: 150 })
    );
    assert_eq!(
        PuzzleSession::generate(DifficultyTier::Hard, 10, 1).map(|_| ()),
        Err(EngineError::InsufficientSkill {
            skill: 10,
            tier: DifficultyTier::Hard,
            required: 75,
        })
    );
}

#[test]
fn report_round_trips_through_json() {
    let report = unit_state_session().report();
    let json = serde_json::to_string(&report).expect("serialize");
    let restored: SessionReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, report);
}
