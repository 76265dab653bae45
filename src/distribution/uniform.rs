//! Continuous uniform distribution
//!
//! A pure linear rescale of the generator's unit draw; it adds no bias of
//! its own and keeps no state besides its bounds.

use std::fmt;
use std::ops::Range;

use super::Distribution;
use crate::generator::Generator;

/// Continuous uniform distribution over `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    low: f64,
    high: f64,
}

impl Uniform {
    /// Creates a distribution over `bounds`.
    ///
    /// # Panics
    /// Panics if the range is empty, has a non-finite bound, or its width
    /// overflows `f64`.
    pub fn new(bounds: Range<f64>) -> Self {
        assert!(
            bounds.start.is_finite()
                && bounds.end.is_finite()
                && bounds.start < bounds.end
                && (bounds.end - bounds.start).is_finite(),
            "Uniform requires a finite, non-empty range, got {}..{}",
            bounds.start,
            bounds.end
        );

        Self {
            low: bounds.start,
            high: bounds.end,
        }
    }

    /// The half-open range samples are drawn from.
    pub fn bounds(&self) -> Range<f64> {
        self.low..self.high
    }
}

impl Distribution for Uniform {
    type Sample = f64;

    fn sample<G: Generator>(&mut self, rng: &mut G) -> f64 {
        self.low + (self.high - self.low) * rng.next_double(0.0..1.0)
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uniform( [{}, {}) )", self.low, self.high)
    }
}
