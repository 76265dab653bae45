//! Probability distributions
//!
//! A distribution reshapes uniform draws from any [`Generator`] into
//! samples of a particular law. Distributions never own a generator; it is
//! borrowed for each draw, so one generator can feed many distributions.

mod gaussian;
mod uniform;

pub use gaussian::Gaussian;
pub use uniform::Uniform;

use crate::generator::Generator;

/// A sampler that reshapes generator output.
pub trait Distribution {
    /// Type of value produced by [`sample`](Distribution::sample).
    type Sample;

    /// Draws one sample, advancing `rng` as needed.
    fn sample<G: Generator>(&mut self, rng: &mut G) -> Self::Sample;
}
