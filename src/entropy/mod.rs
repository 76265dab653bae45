//! Entropy sources
//!
//! An entropy source supplies raw, uniformly distributed bytes on demand.
//! Generators consume a source exactly once, at construction, to fill their
//! initial state; after that they never touch it again.
//!
//! Three sources are provided:
//! - [`OsEntropy`]: the operating system CSPRNG (`getrandom`,
//!   `arc4random_buf`, `BCryptGenRandom`)
//! - [`DevRandom`]: a reader over a device file such as `/dev/urandom`
//! - [`ChaChaEntropy`]: a deterministic ChaCha20 expander, seedable from a
//!   fixed 32-byte key for reproducible runs
//!
//! Sources make no ordering guarantees with respect to each other. Every
//! call returns fresh bits; a failing read after successful construction
//! is treated as unrecoverable and panics.

mod chacha;
mod device;
mod error;
mod system;

pub use chacha::ChaChaEntropy;
pub use device::{DEFAULT_DEVICE, DevRandom};
pub use error::EntropyError;
pub use system::OsEntropy;

/// A supplier of raw random bytes.
///
/// Only [`random_bytes`](EntropySource::random_bytes) is required; the word
/// helpers assemble their result from it in little-endian order.
pub trait EntropySource {
    /// Fills `buf` entirely with random bytes.
    ///
    /// # Panics
    /// Implementations panic if the underlying resource fails mid-stream.
    fn random_bytes(&mut self, buf: &mut [u8]);

    /// Returns 32 random bits.
    fn random_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.random_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    /// Returns 64 random bits.
    fn random_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn random_bytes(&mut self, buf: &mut [u8]) {
        (**self).random_bytes(buf)
    }

    fn random_u32(&mut self) -> u32 {
        (**self).random_u32()
    }

    fn random_u64(&mut self) -> u64 {
        (**self).random_u64()
    }
}
