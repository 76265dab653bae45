//! xorshift128+
//!
//! Sebastiano Vigna's xorshift128+ generator: 128 bits of state in two
//! 64-bit words, advanced with one left shift of 23 and right shifts of 18
//! and 5, returning the wrapping sum of the updated words.
//!
//! The all-zero state is a fixed point and is never allowed.

use std::fmt;

use log::debug;

use super::{Generator, nonzero_pair, write_words};
use crate::entropy::EntropySource;

/// xorshift128+ generator over two 64-bit state words.
///
/// Never in the all-zero state. Equality compares both words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Xorshift128Plus {
    state: [u64; 2],
}

impl Xorshift128Plus {
    /// Creates a generator from an explicit state.
    ///
    /// # Panics
    /// Panics if both words are zero.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        assert!(
            seed0 != 0 || seed1 != 0,
            "Xorshift128Plus cannot be seeded with an all-zero state"
        );

        Self {
            state: [seed0, seed1],
        }
    }
}

impl Generator for Xorshift128Plus {
    type Seed = (u64, u64);

    fn from_entropy<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        let [s0, s1] = nonzero_pair(source, "Xorshift128Plus");
        let rng = Self::from_seed(s0, s1);

        debug!("seeded {rng}");

        rng
    }

    fn seed(&self) -> Self::Seed {
        (self.state[0], self.state[1])
    }

    fn set_seed(&mut self, seed: Self::Seed) {
        *self = Self::from_seed(seed.0, seed.1);
    }

    #[inline]
    fn next_word(&mut self) -> u64 {
        let mut s1 = self.state[0];
        let s0 = self.state[1];

        s1 ^= s1 << 23;

        self.state[0] = s0;
        self.state[1] = s1 ^ s0 ^ (s1 >> 18) ^ (s0 >> 5);

        self.state[0].wrapping_add(self.state[1])
    }
}

impl fmt::Display for Xorshift128Plus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_words(f, "Xorshift128Plus", self.state)
    }
}
