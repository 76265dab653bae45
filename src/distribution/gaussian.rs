//! Normal distribution via the Box-Muller transform
//!
//! Each pair of uniform draws yields two independent standard normal
//! deviates. The first is returned immediately; the second is kept and
//! returned on the next call without touching the generator.

use std::f64::consts::TAU;
use std::fmt;

use super::Distribution;
use crate::generator::Generator;

/// Normal distribution with a given mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mean: f64,
    std_dev: f64,
    spare: f64,
    has_spare: bool,
}

impl Gaussian {
    /// Creates a distribution with no cached deviate.
    ///
    /// # Panics
    /// Panics if `mean` is not finite or `std_dev` is negative or not finite.
    pub fn new(mean: f64, std_dev: f64) -> Self {
        assert!(mean.is_finite(), "Gaussian mean must be finite, got {mean}");
        assert!(
            std_dev.is_finite() && std_dev >= 0.0,
            "Gaussian standard deviation must be finite and non-negative, got {std_dev}"
        );

        Self {
            mean,
            std_dev,
            spare: 0.0,
            has_spare: false,
        }
    }

    /// Mean of the distribution.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the distribution.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Maps two uniform inputs to two standard normal deviates.
    ///
    /// `u1` must be in `(0, 1)`; `u2` in `[0, 1)`.
    pub fn polar(u1: f64, u2: f64) -> (f64, f64) {
        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = TAU * u2;

        (radius * theta.cos(), radius * theta.sin())
    }
}

impl Default for Gaussian {
    /// Standard normal, N(0, 1).
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Distribution for Gaussian {
    type Sample = f64;

    fn sample<G: Generator>(&mut self, rng: &mut G) -> f64 {
        if self.has_spare {
            self.has_spare = false;
            return self.spare * self.std_dev + self.mean;
        }

        // u1 near zero would send ln(u1) to -inf.
        let (u1, u2) = loop {
            let u1 = rng.next_double(0.0..1.0);
            let u2 = rng.next_double(0.0..1.0);

            if u1 > f64::EPSILON {
                break (u1, u2);
            }
        };

        let (z0, z1) = Self::polar(u1, u2);

        self.spare = z1;
        self.has_spare = true;

        z0 * self.std_dev + self.mean
    }
}

impl fmt::Display for Gaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gaussian(μ = {}, σ = {})", self.mean, self.std_dev)
    }
}
