//! 64-bit Mersenne Twister (MT19937-64)
//!
//! Matsumoto and Nishimura's 64-bit Mersenne Twister with period
//! 2¹⁹⁹³⁷ − 1. The state is 312 words plus a read index. Words are
//! consumed one at a time through a tempering transform; once all 312 have
//! been read the whole array is regenerated in place by a "twist".
//!
//! Seeding follows the reference `init_genrand64`, so a given 64-bit seed
//! reproduces the reference output sequence exactly.

use std::fmt;

use log::{debug, trace};

use super::{Generator, write_words};
use crate::entropy::EntropySource;

/// Number of state words.
pub const STATE_WORDS: usize = 312;

/// Offset of the word mixed in during a twist.
const SHIFT_OFFSET: usize = 156;

const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;

/// Most significant 33 bits.
const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;

/// Least significant 31 bits.
const LOWER_MASK: u64 = 0x7FFF_FFFF;

const INIT_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Seed used by the reference implementation when none is given.
pub const DEFAULT_SEED: u64 = 5489;

/// Regenerates all state words.
fn twist(words: &mut [u64; STATE_WORDS]) {
    for i in 0..STATE_WORDS {
        let x = (words[i] & UPPER_MASK) | (words[(i + 1) % STATE_WORDS] & LOWER_MASK);

        let mut x_a = x >> 1;
        if x & 1 != 0 {
            x_a ^= MATRIX_A;
        }

        words[i] = words[(i + SHIFT_OFFSET) % STATE_WORDS] ^ x_a;
    }
}

#[inline]
fn temper(mut x: u64) -> u64 {
    x ^= (x >> 29) & 0x5555_5555_5555_5555;
    x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
    x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
    x ^ (x >> 43)
}

/// MT19937-64 generator.
///
/// Equality compares the full word array and the read index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MersenneTwister19937 {
    words: [u64; STATE_WORDS],
    index: usize,
}

impl MersenneTwister19937 {
    /// Expands a single 64-bit seed into the full state.
    ///
    /// The index starts at [`STATE_WORDS`], so the first draw twists.
    pub fn from_seed(seed: u64) -> Self {
        let mut words = [0u64; STATE_WORDS];
        words[0] = seed;

        for i in 1..STATE_WORDS {
            let prev = words[i - 1];
            words[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }

        Self {
            words,
            index: STATE_WORDS,
        }
    }

    /// Position of the next word to be tempered and returned.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for MersenneTwister19937 {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

impl Generator for MersenneTwister19937 {
    type Seed = ([u64; STATE_WORDS], usize);

    fn from_entropy<S: EntropySource + ?Sized>(source: &mut S) -> Self {
        let seed = source.random_u64();

        debug!("seeded MersenneTwister19937 from {seed:#x}");

        Self::from_seed(seed)
    }

    fn seed(&self) -> Self::Seed {
        (self.words, self.index)
    }

    /// # Panics
    /// Panics if the index exceeds [`STATE_WORDS`] or every word is zero.
    fn set_seed(&mut self, seed: Self::Seed) {
        let (words, index) = seed;

        assert!(
            index <= STATE_WORDS,
            "MersenneTwister19937 index {index} is past the end of the state"
        );
        assert!(
            words.iter().any(|&w| w != 0),
            "MersenneTwister19937 cannot be seeded with an all-zero state"
        );

        self.words = words;
        self.index = index;
    }

    fn next_word(&mut self) -> u64 {
        if self.index == STATE_WORDS {
            twist(&mut self.words);
            self.index = 0;

            trace!("MersenneTwister19937 twisted");
        }

        let word = self.words[self.index];
        self.index += 1;

        temper(word)
    }
}

impl fmt::Display for MersenneTwister19937 {
    /// Renders the read index followed by all state words.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_words(
            f,
            "MersenneTwister19937",
            std::iter::once(self.index as u64).chain(self.words.iter().copied()),
        )
    }
}
