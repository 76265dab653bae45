use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures acquiring or reading an entropy resource.
///
/// These are only ever produced while constructing a source. Once a source
/// exists, reads are expected to succeed.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The entropy device could not be opened.
    #[error("cannot open entropy device {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The entropy device opened but the first read failed.
    #[error("cannot read from entropy device {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The operating system entropy call failed.
    #[error("operating system entropy unavailable: {0}")]
    Unavailable(#[source] io::Error),
}
