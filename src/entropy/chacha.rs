//! ChaCha20 entropy expander
//!
//! A seedable byte source built on the ChaCha20 block function (RFC 8439).
//! Given the same 32-byte seed it always yields the same byte stream, which
//! makes generator seeding reproducible in tests and replays. Seeded from
//! the operating system it behaves like any other entropy source.
//!
//! After each request the key is replaced by fresh keystream, so earlier
//! output cannot be reconstructed from a later state.

use log::debug;

use super::{EntropyError, EntropySource, OsEntropy};

/// `"expand 32-byte k"` as little-endian words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Produces one 64-byte keystream block for `key` at block `counter`
/// with an all-zero nonce.
fn keystream_block(key: &[u32; 8], counter: u32) -> [u8; 64] {
    let mut state = [0u32; 16];
    state[..4].copy_from_slice(&SIGMA);
    state[4..12].copy_from_slice(key);
    state[12] = counter;

    let initial = state;

    for _ in 0..10 {
        // Columns
        quarter_round(&mut state, 0, 4, 8, 12);
        quarter_round(&mut state, 1, 5, 9, 13);
        quarter_round(&mut state, 2, 6, 10, 14);
        quarter_round(&mut state, 3, 7, 11, 15);

        // Diagonals
        quarter_round(&mut state, 0, 5, 10, 15);
        quarter_round(&mut state, 1, 6, 11, 12);
        quarter_round(&mut state, 2, 7, 8, 13);
        quarter_round(&mut state, 3, 4, 9, 14);
    }

    state
        .iter_mut()
        .zip(&initial)
        .for_each(|(s, i)| *s = s.wrapping_add(*i));

    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(&state)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}

fn key_words(bytes: &[u8]) -> [u32; 8] {
    let mut key = [0u32; 8];
    key.iter_mut()
        .zip(bytes.chunks_exact(4))
        .for_each(|(k, b)| *k = u32::from_le_bytes([b[0], b[1], b[2], b[3]]));
    key
}

/// Deterministic entropy source expanding a 256-bit seed with ChaCha20.
#[derive(Clone)]
pub struct ChaChaEntropy {
    key: [u32; 8],
    counter: u32,
}

impl ChaChaEntropy {
    /// Creates a source whose whole output stream is fixed by `seed`.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            key: key_words(&seed),
            counter: 0,
        }
    }

    /// Creates a source keyed from operating system entropy.
    pub fn from_os() -> Result<Self, EntropyError> {
        let mut os = OsEntropy::new()?;
        let mut seed = [0u8; 32];
        os.random_bytes(&mut seed);

        let source = Self::from_seed(seed);
        seed.fill(0);

        debug!("ChaCha20 entropy source keyed from the operating system");

        Ok(source)
    }

    fn rekey(&mut self) {
        let block = keystream_block(&self.key, self.counter);
        self.counter = self.counter.wrapping_add(1);
        self.key = key_words(&block[..32]);
    }
}

impl EntropySource for ChaChaEntropy {
    fn random_bytes(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(64) {
            let block = keystream_block(&self.key, self.counter);
            self.counter = self.counter.wrapping_add(1);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        self.rekey();
    }
}

impl std::fmt::Debug for ChaChaEntropy {
    // Key material stays out of debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChaChaEntropy")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}
