//! Device-file entropy source

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use super::{EntropyError, EntropySource};

/// Default device read by [`DevRandom::new`].
pub const DEFAULT_DEVICE: &str = "/dev/urandom";

/// Entropy read from a special file such as `/dev/urandom`.
///
/// The file handle is held open for the lifetime of the source and closed
/// on drop.
#[derive(Debug)]
pub struct DevRandom {
    path: PathBuf,
    file: File,
}

impl DevRandom {
    /// Opens [`DEFAULT_DEVICE`].
    pub fn new() -> Result<Self, EntropyError> {
        Self::open(DEFAULT_DEVICE)
    }

    /// Opens an arbitrary device or file as an entropy source.
    ///
    /// One byte is read immediately so that an empty or unreadable file is
    /// rejected here rather than on the first draw.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EntropyError> {
        let path = path.as_ref().to_path_buf();

        let mut file = File::open(&path).map_err(|source| EntropyError::Open {
            path: path.clone(),
            source,
        })?;

        let mut probe = [0u8; 1];
        file.read_exact(&mut probe)
            .map_err(|source| EntropyError::Read {
                path: path.clone(),
                source,
            })?;

        debug!("opened entropy device {}", path.display());

        Ok(Self { path, file })
    }

    /// Path of the underlying device.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntropySource for DevRandom {
    fn random_bytes(&mut self, buf: &mut [u8]) {
        if let Err(err) = self.file.read_exact(buf) {
            panic!("read from {} failed: {err}", self.path.display());
        }
    }
}
