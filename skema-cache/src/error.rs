//! Cache store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for cache store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by cache store backends.
///
/// No-op conditions (already cached, indeterminate existence) are not
/// errors; they are ordinary [`Cached`](crate::Cached) values. Only real
/// I/O failures land here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to probe cache entry '{path}'")]
    Probe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write cache entry '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot derive a cache path for '{name}'")]
    Unaddressable { name: String },
}
