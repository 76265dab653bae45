use stochast::entropy::ChaChaEntropy;
use stochast::generator::mt19937::{DEFAULT_SEED, STATE_WORDS};
use stochast::generator::{Generator, MersenneTwister19937};

#[test]
fn matches_reference_output() {
    let mut rng = MersenneTwister19937::from_seed(DEFAULT_SEED);

    assert_eq!(rng.next_word(), 14_514_284_786_278_117_030);
    assert_eq!(rng.next_word(), 4_620_546_740_167_642_908);

    for _ in 2..9_999 {
        rng.next_word();
    }

    // The 10000th output of a default-seeded mt19937_64.
    assert_eq!(rng.next_word(), 9_981_545_732_273_789_042);
}

#[test]
fn default_uses_reference_seed() {
    assert_eq!(
        MersenneTwister19937::default(),
        MersenneTwister19937::from_seed(5489)
    );
}

#[test]
fn identical_seeds_give_identical_sequences() {
    let mut a = MersenneTwister19937::from_seed(0x0123_4567_89AB_CDEF);
    let mut b = MersenneTwister19937::from_seed(0x0123_4567_89AB_CDEF);

    // Spans more than three twists.
    for _ in 0..1_000 {
        assert_eq!(a.next_word(), b.next_word());
    }

    assert_eq!(a, b);
}

#[test]
fn identical_entropy_gives_identical_sequences() {
    let mut a = MersenneTwister19937::from_entropy(&mut ChaChaEntropy::from_seed([3; 32]));
    let mut b = MersenneTwister19937::from_entropy(&mut ChaChaEntropy::from_seed([3; 32]));

    for _ in 0..1_000 {
        assert_eq!(a.next_word(), b.next_word());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = MersenneTwister19937::from_seed(1);
    let mut b = MersenneTwister19937::from_seed(2);

    let same = (0..1_000).filter(|_| a.next_word() == b.next_word()).count();
    assert_eq!(same, 0);
}

#[test]
fn index_walks_through_state_and_twists() {
    let mut rng = MersenneTwister19937::from_seed(77);
    assert_eq!(rng.index(), STATE_WORDS);

    rng.next_word();
    assert_eq!(rng.index(), 1);

    for _ in 1..STATE_WORDS {
        rng.next_word();
    }
    assert_eq!(rng.index(), STATE_WORDS);

    rng.next_word();
    assert_eq!(rng.index(), 1);
}

#[test]
fn seed_round_trips_through_set_seed() {
    let mut rng = MersenneTwister19937::from_seed(1234);
    for _ in 0..500 {
        rng.next_word();
    }

    let snapshot = rng.seed();
    let expected: Vec<u64> = (0..700).map(|_| rng.next_word()).collect();

    let mut replay = MersenneTwister19937::from_seed(1);
    replay.set_seed(snapshot);

    let actual: Vec<u64> = (0..700).map(|_| replay.next_word()).collect();
    assert_eq!(actual, expected);
}

#[test]
#[should_panic(expected = "past the end of the state")]
fn set_seed_rejects_bad_index() {
    let mut rng = MersenneTwister19937::from_seed(1);
    let (words, _) = rng.seed();
    rng.set_seed((words, STATE_WORDS + 1));
}

#[test]
#[should_panic(expected = "all-zero state")]
fn set_seed_rejects_zero_state() {
    let mut rng = MersenneTwister19937::from_seed(1);
    rng.set_seed(([0; STATE_WORDS], 0));
}
