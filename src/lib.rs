//! Pseudo-random number generation core
//!
//! This crate provides a small, explicit foundation for generating random
//! values from a handful of well-known pseudo-random algorithms.
//!
//! The focus is on **exact, reproducible bit-level behavior** rather than on
//! a large or high-level API. Every generator exposes the same contract, and
//! everything above the raw stepping primitive (booleans, bounded integers,
//! bounded floats) is shared code.
//!
//! # Module overview
//!
//! - `entropy`
//!   Sources of raw unpredictable bytes used to seed generators: the
//!   operating system CSPRNG, a device file reader (`/dev/urandom`), and a
//!   deterministic ChaCha20 expander for reproducible seeding.
//!
//! - `generator`
//!   The `Generator` and `ReversibleGenerator` traits, the integer-to-float
//!   bit conversion, unbiased rejection sampling, and the four concrete
//!   algorithms:
//!   - `Xorshift128Plus`
//!   - `Xoroshiro128Plus`
//!   - `CombinedLcg4` (reversible, can step backward)
//!   - `MersenneTwister19937` (64-bit variant)
//!
//! - `distribution`
//!   Thin samplers layered on any generator: `Uniform` and `Gaussian`.
//!
//! # Design goals
//!
//! - Generators own their state exclusively; no interior sharing
//! - Seeding happens once, at construction, from an `EntropySource`
//! - Invalid configuration (zero seeds, empty ranges) panics loudly
//! - Resource failures (missing entropy device) surface as `Result`
//!
//! None of the generators are cryptographically secure. They are intended
//! for simulation, sampling, and testing.

mod os;

pub mod distribution;
pub mod entropy;
pub mod generator;

pub use distribution::{Distribution, Gaussian, Uniform};
pub use entropy::{ChaChaEntropy, DevRandom, EntropyError, EntropySource, OsEntropy};
pub use generator::{
    CombinedLcg4, Generator, MersenneTwister19937, ReversibleGenerator, Xoroshiro128Plus,
    Xorshift128Plus,
};
