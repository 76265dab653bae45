use proptest::prelude::*;

use stochast::entropy::{ChaChaEntropy, OsEntropy};
use stochast::generator::lcg4::{FORWARD_MULTIPLIERS, MODULI, REVERSE_MULTIPLIERS};
use stochast::generator::{CombinedLcg4, Generator, ReversibleGenerator};

/// Modular inverse by the extended Euclidean algorithm.
fn inverse_mod(a: i64, m: i64) -> i64 {
    let (mut old_r, mut r) = (a, m);
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    assert_eq!(old_r, 1, "{a} is not invertible modulo {m}");
    old_s.rem_euclid(m)
}

#[test]
fn reverse_multipliers_are_modular_inverses() {
    for lane in 0..4 {
        let m = i64::from(MODULI[lane]);
        let a = i64::from(FORWARD_MULTIPLIERS[lane]);

        assert_eq!(inverse_mod(a, m), i64::from(REVERSE_MULTIPLIERS[lane]), "lane {lane}");
        assert_eq!(
            u64::from(FORWARD_MULTIPLIERS[lane]) * u64::from(REVERSE_MULTIPLIERS[lane])
                % u64::from(MODULI[lane]),
            1
        );
    }
}

proptest! {
    #[test]
    fn lane_step_round_trips(lane in 0usize..4, raw in any::<u32>()) {
        let value = raw % MODULI[lane];

        prop_assert_eq!(CombinedLcg4::advance_lane(lane, CombinedLcg4::retreat_lane(lane, value)), value);
        prop_assert_eq!(CombinedLcg4::retreat_lane(lane, CombinedLcg4::advance_lane(lane, value)), value);
    }

    #[test]
    fn lane_steps_stay_below_modulus(lane in 0usize..4, raw in any::<u32>()) {
        let value = raw % MODULI[lane];

        prop_assert!(CombinedLcg4::advance_lane(lane, value) < MODULI[lane]);
        prop_assert!(CombinedLcg4::retreat_lane(lane, value) < MODULI[lane]);
    }

    #[test]
    fn previous_replays_next(seed in any::<[u8; 32]>(), steps in 1usize..64) {
        let mut rng = CombinedLcg4::from_entropy(&mut ChaChaEntropy::from_seed(seed));
        let start = rng;

        let forward: Vec<f64> = (0..steps).map(|_| rng.next_double(0.0..1.0)).collect();
        let backward: Vec<f64> = (0..steps).map(|_| rng.previous_double(0.0..1.0)).collect();

        prop_assert_eq!(rng, start);
        prop_assert!(forward.iter().rev().eq(backward.iter()));
    }
}

#[test]
fn previous_yields_values_in_reverse_order() {
    let mut rng = CombinedLcg4::from_entropy(&mut OsEntropy::new().unwrap());

    let a = rng.next_double(0.0..1.0);
    let b = rng.next_double(0.0..1.0);

    assert_eq!(rng.previous_double(0.0..1.0), b);
    assert_eq!(rng.previous_double(0.0..1.0), a);
}

#[test]
fn next_after_previous_replays_history() {
    let mut rng = CombinedLcg4::from_seed([11, 22, 33, 44]);

    let first = rng.next_double(-5.0..5.0);
    let back = rng.previous_double(-5.0..5.0);
    let again = rng.next_double(-5.0..5.0);

    assert_eq!(first, back);
    assert_eq!(first, again);
}

#[test]
fn reversible_bool_and_closed_ranges() {
    let mut rng = CombinedLcg4::from_seed([123_456, 654_321, 42, 7]);
    let start = rng;

    let bools: Vec<bool> = (0..500).map(|_| rng.next_bool()).collect();
    let doubles: Vec<f64> = (0..500).map(|_| rng.next_double_inclusive(0.0..=1.0)).collect();

    for &expected in doubles.iter().rev() {
        assert_eq!(rng.previous_double_inclusive(0.0..=1.0), expected);
    }
    for &expected in bools.iter().rev() {
        assert_eq!(rng.previous_bool(), expected);
    }

    assert_eq!(rng, start);
}

#[test]
fn reversible_ints_replay() {
    let mut rng = CombinedLcg4::from_seed([9, 8, 7, 6]);

    // Rejection is vanishingly rare for a width of 100 against 2^52 words,
    // so each draw consumes exactly one step.
    let ints: Vec<i64> = (0..1_000).map(|_| rng.next_int(-50..50)).collect();
    let closed: Vec<i64> = (0..1_000).map(|_| rng.next_int_inclusive(0..=6)).collect();

    for &expected in closed.iter().rev() {
        assert_eq!(rng.previous_int_inclusive(0..=6), expected);
    }
    for &expected in ints.iter().rev() {
        assert_eq!(rng.previous_int(-50..50), expected);
    }

    assert_eq!(rng.seed(), [9, 8, 7, 6]);
}

#[test]
fn known_first_step() {
    let mut rng = CombinedLcg4::from_seed([1, 2, 3, 4]);
    let value = rng.next_unit();

    assert_eq!(rng.seed(), [45_991, 415_414, 415_668, 198_756]);
    assert!((value - 0.999_928_981_528_236_3).abs() < 1e-15);
    assert_eq!(rng.current(), value);
}

#[test]
fn current_stays_in_unit_interval() {
    let mut rng = CombinedLcg4::from_entropy(&mut OsEntropy::new().unwrap());

    for _ in 0..100_000 {
        let value = rng.next_unit();
        assert!((0.0..1.0).contains(&value));
    }
}

#[test]
fn word_range_is_52_bits() {
    assert_eq!(CombinedLcg4::WORD_MAX, (1u64 << 52) - 1);

    let mut rng = CombinedLcg4::from_seed([5, 5, 5, 5]);
    for _ in 0..10_000 {
        assert!(rng.next_word() <= CombinedLcg4::WORD_MAX);
    }
}

#[test]
#[should_panic(expected = "exceeds the generator range")]
fn range_wider_than_52_bits_panics() {
    CombinedLcg4::from_seed([1, 2, 3, 4]).next_int(0..(1i64 << 53));
}

#[test]
#[should_panic(expected = "all-zero state")]
fn rejects_zero_seed() {
    CombinedLcg4::from_seed([0; 4]);
}

#[test]
#[should_panic(expected = "not below its modulus")]
fn rejects_lane_at_modulus() {
    CombinedLcg4::from_seed([1, MODULI[1], 0, 0]);
}

/// Half of all 52-bit words are rejected for this width, as they are for
/// the closed range `-(1 << 50)..=1 << 50`.
const WIDE: i64 = (1 << 51) + 1;
const WIDE_LIMIT: u64 = 1 << 51;

/// Steps forward until the current word would be accepted for `0..WIDE`.
fn settle(rng: &mut CombinedLcg4) {
    while rng.current_word() > WIDE_LIMIT {
        rng.next_word();
    }
}

#[test]
fn wide_range_next_int_rewinds_rejected_words() {
    let mut source = ChaChaEntropy::from_seed([5; 32]);
    let mut rejected_somewhere = false;

    for _ in 0..1_000 {
        let mut rng = CombinedLcg4::from_entropy(&mut source);
        settle(&mut rng);
        let start = rng;

        let value = rng.next_int(0..WIDE);
        rejected_somewhere |= {
            let mut single = start;
            single.next_word();
            single != rng
        };

        assert_eq!(rng.previous_int(0..WIDE), value);
        assert_eq!(rng, start);
    }

    assert!(rejected_somewhere, "no draw exercised rejection");
}

#[test]
fn wide_range_run_replays_in_reverse() {
    let mut rng = CombinedLcg4::from_entropy(&mut ChaChaEntropy::from_seed([17; 32]));
    settle(&mut rng);
    let start = rng;

    let forward: Vec<i64> = (0..2_000).map(|_| rng.next_int(0..WIDE)).collect();
    let closed: Vec<i64> = (0..2_000)
        .map(|_| rng.next_int_inclusive(-(1 << 50)..=1 << 50))
        .collect();

    for &expected in closed.iter().rev() {
        assert_eq!(rng.previous_int_inclusive(-(1 << 50)..=1 << 50), expected);
    }
    for &expected in forward.iter().rev() {
        assert_eq!(rng.previous_int(0..WIDE), expected);
    }

    assert_eq!(rng, start);
}

#[test]
fn current_word_does_not_step() {
    let rng = CombinedLcg4::from_seed([1, 2, 3, 4]);
    let mut twin = rng;

    assert_eq!(rng.current_word(), rng.current_word());
    assert_eq!(twin.previous_word(), rng.current_word());
}
