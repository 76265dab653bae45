//! Operating system CSPRNG source

use log::debug;

use super::{EntropyError, EntropySource};
use crate::os::sys_random;

/// Entropy drawn straight from the operating system CSPRNG.
///
/// This type holds no state; every call goes to the kernel (or the
/// platform equivalent).
#[derive(Debug, Clone, Copy)]
pub struct OsEntropy {
    _private: (),
}

impl OsEntropy {
    /// Creates a source after probing the OS call once.
    ///
    /// Probing up front means an unavailable entropy pool is reported here,
    /// as an error, rather than as a panic on the first draw.
    pub fn new() -> Result<Self, EntropyError> {
        let mut probe = [0u8; 8];
        sys_random(&mut probe).map_err(EntropyError::Unavailable)?;

        debug!("operating system entropy source ready");

        Ok(Self { _private: () })
    }
}

impl EntropySource for OsEntropy {
    fn random_bytes(&mut self, buf: &mut [u8]) {
        if let Err(err) = sys_random(buf) {
            panic!("operating system entropy read failed: {err}");
        }
    }
}
