//! xoroshiro128+
//!
//! The xor/rotate/shift/rotate successor of xorshift128+: the second word
//! is folded into the first, the first is rotated left by 55 and mixed with
//! a left shift of 14, and the second is rotated left by 36. The output is
//! the wrapping sum of the two updated words.

use std::fmt;

use log::debug;

use super::{Generator, nonzero_pair, write_words};
use crate::entropy::EntropySource;

/// xoroshiro128+ generator over two 64-bit state words.
///
/// Never in the all-zero state. Equality compares both words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Xoroshiro128Plus {
    state: [u64; 2],
}

impl Xoroshiro128Plus {
    /// Creates a generator from an explicit state.
    ///
    /// # Panics
    /// Panics if both words are zero.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        assert!(
            seed0 != 0 || seed1 != 0,
            "Xoroshiro128Plus cannot be seeded with an all-zero state"
        );

        Self {
            state: [seed0, seed1],
        }
    }
}

impl Generator for Xoroshiro128Plus {
    type Seed = (u64, u64);

    fn from_entropy<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        let [s0, s1] = nonzero_pair(source, "Xoroshiro128Plus");
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
        let s0 = self.state[0];
        let s1 = self.state[1] ^ s0;

        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        self.state[0].wrapping_add(self.state[1])
    }
}

impl fmt::Display for Xoroshiro128Plus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_words(f, "Xoroshiro128Plus", self.state)
    }
}
