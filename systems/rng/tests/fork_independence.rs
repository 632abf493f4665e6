use terminal_hack_system_rng::{FixedSeed, SeedSource, Xoroshiro128};

const DRAWS: usize = 4_096;

#[test]
fn forked_stream_diverges_from_parent() {
    let mut parent = Xoroshiro128::from_seed(0x5eed);
    let mut child = parent.fork();

    let matches = (0..DRAWS)
        .filter(|_| parent.next_u64() == child.next_u64())
        .count();

    assert_eq!(matches, 0, "forked stream tracked its parent");
}

#[test]
fn sibling_forks_diverge() {
    let mut parent = Xoroshiro128::default();
    let mut first = parent.fork();
    let mut second = parent.fork();

    let low_bit_agreement = (0..DRAWS)
        .filter(|_| (first.next_u64() & 1) == (second.next_u64() & 1))
        .count();

    // Independent streams agree on the low bit about half the time.
    assert!(
        (DRAWS / 4..DRAWS * 3 / 4).contains(&low_bit_agreement),
        "low bit agreement {low_bit_agreement} of {DRAWS} suggests correlated forks"
    );
}

#[test]
fn parent_sequence_replays_after_fork() {
    let replay = || {
        let mut parent = Xoroshiro128::from_source(&FixedSeed::new(77));
        let mut child = parent.fork();
        let parent_draws: Vec<u64> = (0..16).map(|_| parent.next_u64()).collect();
        let child_draws: Vec<u64> = (0..16).map(|_| child.next_u64()).collect();
        (parent_draws, child_draws)
    };

    assert_eq!(replay(), replay());
}

#[test]
fn seed_sources_are_interchangeable() {
    struct Constant;

    impl SeedSource for Constant {
        fn seed(&self) -> u64 {
            1_234
        }
    }

    assert_eq!(
        Xoroshiro128::from_source(&Constant),
        Xoroshiro128::from_source(&FixedSeed::new(1_234))
    );
}
