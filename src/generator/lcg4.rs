//! Combined four-lane multiplicative congruential generator
//!
//! Four independent multiplicative LCGs with prime-like moduli just below
//! 2³¹ (L'Ecuyer and Andres, 1997). Each lane is stepped with
//!
//! ```text
//! lane[i] = a[i] * lane[i] mod m[i]
//! ```
//!
//! and the four lanes are combined into one value in `[0, 1)` by alternately
//! adding and subtracting their normalized contributions modulo 1.
//!
//! Because every `a[i]` is invertible modulo `m[i]`, the step can be undone
//! exactly by multiplying with the modular inverse, which makes this
//! generator reversible.
//!
//! The raw word used for integer sampling is the 52-bit mantissa of
//! `value + 1.0`, so [`Generator::WORD_MAX`] is `2⁵² − 1` here rather than
//! `u64::MAX`.

use std::fmt;

use log::{debug, warn};

use super::bits::{F64_MANTISSA_MASK, mantissa_f64};
use super::{Generator, ReversibleGenerator, write_words};
use crate::entropy::EntropySource;

/// Lane moduli.
pub const MODULI: [u32; 4] = [2_147_483_647, 2_147_483_543, 2_147_483_423, 2_147_483_323];

/// Forward lane multipliers.
pub const FORWARD_MULTIPLIERS: [u32; 4] = [45_991, 207_707, 138_556, 49_689];

/// Modular inverses of [`FORWARD_MULTIPLIERS`] under [`MODULI`].
pub const REVERSE_MULTIPLIERS: [u32; 4] = [1_441_196_816, 1_463_744_518, 499_766_181, 660_421_676];

const NORMALIZERS: [f64; 4] = [
    1.0 / MODULI[0] as f64,
    1.0 / MODULI[1] as f64,
    1.0 / MODULI[2] as f64,
    1.0 / MODULI[3] as f64,
];

/// Largest `f64` below `1.0`.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

#[inline]
fn mul_mod(multiplier: u32, value: u32, modulus: u32) -> u32 {
    // Both factors are below 2^32, so the product fits in a u64.
    (u64::from(multiplier) * u64::from(value) % u64::from(modulus)) as u32
}

#[inline]
fn step_lanes(lanes: [u32; 4], multipliers: &[u32; 4]) -> [u32; 4] {
    std::array::from_fn(|i| mul_mod(multipliers[i], lanes[i], MODULI[i]))
}

/// Reversible combination of four multiplicative LCGs.
///
/// The state is the four lane values; equality and hashing are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombinedLcg4 {
    lanes: [u32; 4],
}

impl CombinedLcg4 {
    /// Creates a generator from explicit lane values.
    ///
    /// # Panics
    /// Panics if all lanes are zero or a lane is not below its modulus.
    pub fn from_seed(lanes: [u32; 4]) -> Self {
        assert!(
            lanes != [0; 4],
            "CombinedLcg4 cannot be seeded with an all-zero state"
        );

        for (i, (&lane, &modulus)) in lanes.iter().zip(&MODULI).enumerate() {
            assert!(
                lane < modulus,
                "CombinedLcg4 lane {i} value {lane} is not below its modulus {modulus}"
            );
        }

        Self { lanes }
    }

    /// Steps a single lane forward.
    ///
    /// # Panics
    /// Panics if `lane` is not in `0..4`.
    pub fn advance_lane(lane: usize, value: u32) -> u32 {
        mul_mod(FORWARD_MULTIPLIERS[lane], value, MODULI[lane])
    }

    /// Steps a single lane backward.
    pub fn retreat_lane(lane: usize, value: u32) -> u32 {
        mul_mod(REVERSE_MULTIPLIERS[lane], value, MODULI[lane])
    }

    /// The combined value of the current state, in `[0.0, 1.0)`.
    ///
    /// Reading it does not advance the generator.
    pub fn current(&self) -> f64 {
        let [l0, l1, l2, l3] = self.lanes.map(f64::from);

        let mut value = l0 * NORMALIZERS[0];

        value -= l1 * NORMALIZERS[1];
        if value < 0.0 {
            value = (value + 1.0).min(BELOW_ONE);
        }

        value += l2 * NORMALIZERS[2];
        if value >= 1.0 {
            value -= 1.0;
        }

        value -= l3 * NORMALIZERS[3];
        if value < 0.0 {
            value = (value + 1.0).min(BELOW_ONE);
        }

        value
    }

    #[inline]
    fn advance(&mut self) {
        self.lanes = step_lanes(self.lanes, &FORWARD_MULTIPLIERS);
    }

    #[inline]
    fn retreat(&mut self) {
        self.lanes = step_lanes(self.lanes, &REVERSE_MULTIPLIERS);
    }
}

impl Generator for CombinedLcg4 {
    type Seed = [u32; 4];

    const WORD_MAX: u64 = F64_MANTISSA_MASK;

    fn from_entropy<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        loop {
            let mut lanes = [0u32; 4];
            for (lane, &modulus) in lanes.iter_mut().zip(&MODULI) {
                *lane = source.random_u32() % modulus;
            }

            if lanes != [0; 4] {
                let rng = Self::from_seed(lanes);
                debug!("seeded {rng}");
                return rng;
            }

            warn!("CombinedLcg4: entropy produced an all-zero state, resampling");
        }
    }

    fn seed(&self) -> Self::Seed {
        self.lanes
    }

    fn set_seed(&mut self, seed: Self::Seed) {
        *self = Self::from_seed(seed);
    }

    fn next_word(&mut self) -> u64 {
        self.advance();
        self.current_word()
    }

    fn next_unit(&mut self) -> f64 {
        self.advance();
        self.current()
    }
}

impl ReversibleGenerator for CombinedLcg4 {
    /// The 52 mantissa bits of `current() + 1.0`.
    #[inline]
    fn current_word(&self) -> u64 {
        mantissa_f64(self.current() + 1.0)
    }

    fn previous_word(&mut self) -> u64 {
        let word = self.current_word();
        self.retreat();
        word
    }

    fn previous_unit(&mut self) -> f64 {
        let value = self.current();
        self.retreat();
        value
    }
}

impl fmt::Display for CombinedLcg4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_words(f, "CombinedLcg4", self.lanes)
    }
}
