//! Range checks and unbiased bounded sampling
//!
//! Integer draws use rejection sampling: raw words above the largest
//! multiple of the range width that fits in the engine range are thrown
//! away, so every residue is produced by the same number of raw words.
//! Acceptance probability is always above one half, so the expected number
//! of draws is below two.

use std::ops::{Range, RangeInclusive};

/// An integer range normalized to `low` plus a width.
///
/// A width of zero stands for the full 2⁶⁴ values of `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    low: i64,
    width: u64,
}

impl Span {
    pub(crate) fn half_open(range: Range<i64>) -> Self {
        assert!(
            range.start < range.end,
            "empty integer range {}..{}",
            range.start,
            range.end
        );

        Self {
            low: range.start,
            width: range.end.wrapping_sub(range.start) as u64,
        }
    }

    pub(crate) fn closed(range: RangeInclusive<i64>) -> Self {
        let (low, high) = range.into_inner();
        assert!(low <= high, "empty integer range {low}..={high}");

        Self {
            low,
            width: (high.wrapping_sub(low) as u64).wrapping_add(1),
        }
    }

    /// Largest raw word accepted for this span, given that `word_max` is
    /// the largest word the generator can produce.
    ///
    /// # Panics
    /// Panics if the span holds more values than the generator range.
    pub(crate) fn limit(self, word_max: u64) -> u64 {
        if self.width == 0 {
            assert!(
                word_max == u64::MAX,
                "integer range of 2^64 values exceeds the generator range 0..={word_max:#x}"
            );
            return u64::MAX;
        }

        assert!(
            self.width - 1 <= word_max,
            "integer range of {} values exceeds the generator range 0..={word_max:#x}",
            self.width
        );

        // word_max + 1 words split into residues; drop the incomplete tail.
        let excess = (word_max % self.width + 1) % self.width;
        word_max - excess
    }

    /// Draws words from `draw` until one is at or below the limit, then maps
    /// it into the span.
    pub(crate) fn sample(self, word_max: u64, mut draw: impl FnMut() -> u64) -> i64 {
        let limit = self.limit(word_max);

        let mut word = draw();
        while word > limit {
            word = draw();
        }

        self.map(word)
    }

    fn map(self, word: u64) -> i64 {
        if self.width == 0 {
            self.low.wrapping_add(word as i64)
        } else {
            self.low.wrapping_add((word % self.width) as i64)
        }
    }
}

/// Validates a half-open float range and returns its bounds.
pub(crate) fn half_open_f64(range: Range<f64>) -> (f64, f64) {
    assert!(
        range.start.is_finite() && range.end.is_finite(),
        "non-finite float range {}..{}",
        range.start,
        range.end
    );
    assert!(
        range.start < range.end,
        "empty float range {}..{}",
        range.start,
        range.end
    );
    assert!(
        (range.end - range.start).is_finite(),
        "float range {}..{} is too wide, its width overflows f64",
        range.start,
        range.end
    );

    (range.start, range.end)
}

/// Converts a closed float range to the half-open range with the same
/// reachable values, by moving the upper bound one ulp up.
pub(crate) fn closed_f64(range: RangeInclusive<f64>) -> Range<f64> {
    let (low, high) = range.into_inner();
    assert!(
        low.is_finite() && high.is_finite(),
        "non-finite float range {low}..={high}"
    );
    assert!(low <= high, "empty float range {low}..={high}");

    let end = high.next_up();
    assert!(
        end.is_finite(),
        "float range {low}..={high} is too wide, its upper bound has no successor"
    );

    low..end
}

/// Rescales a unit draw into `[low, high)`.
#[inline]
pub(crate) fn scale(low: f64, high: f64, unit: f64) -> f64 {
    low + (high - low) * unit
}
