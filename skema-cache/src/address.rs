//! Normalized write destinations.

use std::fmt;

/// Normalized identifier for a cache-stored artifact.
///
/// An address is either an absolute remote URI (`http://` or `https://`) or
/// a local output path with a forced leading `/`. The `is_local` flag tells
/// the store whether the address denotes an artifact mirrored from disk; the
/// exporter marks its generated output non-local so the store treats it as a
/// self-contained destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    uri: String,
    is_local: bool,
}

impl Address {
    /// Wrap an already-normalized identifier.
    ///
    /// Remote URIs are detected by scheme; anything else is flagged local.
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let is_local = !is_remote_name(&uri);
        Self { uri, is_local }
    }

    /// Normalize a canonical output name into a write destination.
    ///
    /// Absolute `http(s)://` names pass through verbatim; everything else is
    /// treated as a local path and forced to a leading root separator. The
    /// result is marked non-local.
    pub fn for_output(out_name: &str) -> Self {
        let uri = if is_remote_name(out_name) {
            out_name.to_string()
        } else {
            format!("/{}", out_name.trim_start_matches('/'))
        };
        Self {
            uri,
            is_local: false,
        }
    }

    /// The normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Whether the address denotes a local on-disk artifact.
    pub fn is_local(&self) -> bool {
        self.is_local
    }

    /// Whether the identifier is an absolute remote URI.
    pub fn is_remote(&self) -> bool {
        is_remote_name(&self.uri)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

fn is_remote_name(name: &str) -> bool {
    name.starts_with("http://") || name.starts_with("https://")
}
