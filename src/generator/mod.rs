//! Pseudo-random generators
//!
//! Every algorithm implements [`Generator`] by supplying a single raw
//! stepping primitive, [`Generator::next_word`]. Booleans, bounded floats
//! and bounded integers are derived from it by shared default methods:
//!
//! - booleans: parity of the raw word (even is `true`)
//! - floats: [`bits::unit_f64`] rescaled into the requested range
//! - integers: rejection sampling over the raw word range
//!
//! [`CombinedLcg4`] can also run backward and implements
//! [`ReversibleGenerator`], whose `previous_*` methods return the value the
//! matching `next_*` call produced and restore the state from before it.

pub mod bits;
pub mod lcg4;
pub mod mt19937;
mod sampling;
mod xoroshiro;
mod xorshift;

use std::fmt::{self, LowerHex, UpperHex};
use std::ops::{Range, RangeInclusive};

use log::warn;

use crate::entropy::EntropySource;
use sampling::Span;

pub use lcg4::CombinedLcg4;
pub use mt19937::MersenneTwister19937;
pub use xoroshiro::Xoroshiro128Plus;
pub use xorshift::Xorshift128Plus;

/// Common contract of all generators.
pub trait Generator {
    /// Externally visible snapshot of the generator state.
    type Seed;

    /// Largest value [`next_word`](Generator::next_word) can return.
    const WORD_MAX: u64 = u64::MAX;

    /// Builds a generator whose state is drawn from `source`.
    fn from_entropy<S: EntropySource + ?Sized>(source: &mut S) -> Self;

    /// Returns a copy of the current state.
    fn seed(&self) -> Self::Seed;

    /// Replaces the current state.
    ///
    /// # Panics
    /// Panics if `seed` is a degenerate state for the algorithm.
    fn set_seed(&mut self, seed: Self::Seed);

    /// Advances the state once and returns the raw output word.
    fn next_word(&mut self) -> u64;

    /// Advances the state and returns a uniform value in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64 {
        bits::unit_f64(self.next_word())
    }

    /// Fair coin: `true` when the next raw word is even.
    fn next_bool(&mut self) -> bool {
        self.next_word() % 2 == 0
    }

    /// Uniform value in `range`.
    ///
    /// # Panics
    /// Panics if the range is empty, has a non-finite bound, or is so wide
    /// that `end - start` overflows.
    fn next_double(&mut self, range: Range<f64>) -> f64 {
        let (low, high) = sampling::half_open_f64(range);
        sampling::scale(low, high, self.next_unit())
    }

    /// Uniform value in `range`, upper bound included.
    ///
    /// The range is widened to the next representable value above its upper
    /// bound, so an upper bound of `f64::MAX` panics.
    fn next_double_inclusive(&mut self, range: RangeInclusive<f64>) -> f64 {
        self.next_double(sampling::closed_f64(range))
    }

    /// Unbiased integer in `range`.
    ///
    /// # Panics
    /// Panics if the range is empty or wider than the raw word range.
    fn next_int(&mut self, range: Range<i64>) -> i64 {
        Span::half_open(range).sample(Self::WORD_MAX, || self.next_word())
    }

    /// Unbiased integer in `range`, upper bound included.
    fn next_int_inclusive(&mut self, range: RangeInclusive<i64>) -> i64 {
        Span::closed(range).sample(Self::WORD_MAX, || self.next_word())
    }
}

/// A generator whose state transition can be undone exactly.
///
/// Each `previous_*` method mirrors its `next_*` counterpart: it returns
/// the value the generator currently sits on and then steps back, so that
///
/// ```text
/// a = next(); b = next(); previous() == b; previous() == a
/// ```
///
/// and a `next` following a `previous` replays the same value again.
///
/// Integer draws undo their rejection sampling too: after stepping back
/// over the accepted word, `previous_int` keeps stepping back over every
/// word the same range would have rejected. A run of same-range `next_int`
/// calls therefore replays exactly, provided the state it started from
/// does not itself sit on a rejected word. If it does, going backward
/// steps past that starting state.
pub trait ReversibleGenerator: Generator {
    /// Raw word of the current state, without stepping.
    fn current_word(&self) -> u64;

    /// Returns the raw word of the current state, then steps back once.
    fn previous_word(&mut self) -> u64;

    /// Returns the unit value of the current state, then steps back once.
    fn previous_unit(&mut self) -> f64 {
        bits::unit_f64(self.previous_word())
    }

    /// Undoes one [`next_bool`](Generator::next_bool), returning its value.
    fn previous_bool(&mut self) -> bool {
        self.previous_word() % 2 == 0
    }

    /// Undoes one [`next_double`](Generator::next_double) over the same
    /// range, returning its value.
    fn previous_double(&mut self, range: Range<f64>) -> f64 {
        let (low, high) = sampling::half_open_f64(range);
        sampling::scale(low, high, self.previous_unit())
    }

    /// Closed-range counterpart of
    /// [`previous_double`](ReversibleGenerator::previous_double).
    fn previous_double_inclusive(&mut self, range: RangeInclusive<f64>) -> f64 {
        self.previous_double(sampling::closed_f64(range))
    }

    /// Undoes one [`next_int`](Generator::next_int) over the same range,
    /// including any words it rejected.
    fn previous_int(&mut self, range: Range<i64>) -> i64 {
        rewind(self, Span::half_open(range))
    }

    /// Closed-range counterpart of
    /// [`previous_int`](ReversibleGenerator::previous_int).
    fn previous_int_inclusive(&mut self, range: RangeInclusive<i64>) -> i64 {
        rewind(self, Span::closed(range))
    }
}

/// Steps back to the last accepted word, then past the words that were
/// rejected before it.
fn rewind<G: ReversibleGenerator + ?Sized>(rng: &mut G, span: Span) -> i64 {
    let limit = span.limit(G::WORD_MAX);
    let value = span.sample(G::WORD_MAX, || rng.previous_word());

    while rng.current_word() > limit {
        rng.previous_word();
    }

    value
}

/// Renders a seed word as bare hexadecimal, for diagnostics.
pub fn describe<W: LowerHex + UpperHex>(word: W, uppercase: bool) -> String {
    if uppercase {
        format!("{word:X}")
    } else {
        format!("{word:x}")
    }
}

/// Writes `Name(0x<w0>|<w1>|...)`.
pub(crate) fn write_words<W: LowerHex>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    words: impl IntoIterator<Item = W>,
) -> fmt::Result {
    write!(f, "{name}(0x")?;

    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            f.write_str("|")?;
        }

        write!(f, "{word:x}")?;
    }

    f.write_str(")")
}

/// Draws two 64-bit words, redrawing while both are zero.
pub(crate) fn nonzero_pair<S: EntropySource + ?Sized>(source: &mut S, name: &str) -> [u64; 2] {
    loop {
        let pair = [source.random_u64(), source.random_u64()];

        if pair != [0, 0] {
            return pair;
        }

        warn!("{name}: entropy produced an all-zero state, resampling");
    }
}
