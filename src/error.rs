//! Error type.

use std::io;
use std::path::PathBuf;

/// Errors that stop rendering.
///
/// Malformed markdown is never an error; only I/O can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A named input could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading an input failed part way through.
    #[error("read error: {0}")]
    Read(#[source] io::Error),

    /// Writing the rendered output failed.
    #[error("write error: {0}")]
    Write(#[source] io::Error),
}

impl Error {
    /// Whether this is a write to a closed pipe (e.g. output piped to `head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result alias for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;
