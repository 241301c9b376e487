//! The narrow storage surface consumed by exporters.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::{Address, Result};

/// Answer of an existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cached {
    /// The name is already materialized in the cache.
    Present,
    /// The name is not materialized yet.
    Absent,
    /// The backend cannot answer for this name shape.
    ///
    /// Some backends only support a subset of name shapes; callers treat
    /// this as "nothing to do", not as an error.
    Indeterminate,
}

/// Result of a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The content was physically written.
    Stored,
    /// Another write to the same address already happened or is in flight.
    Deduplicated,
}

/// Pluggable cache backend.
///
/// One store instance may serve many concurrently running exporters; it
/// alone is responsible for at-most-one physical write per address.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Map a logical artifact name to its on-disk cache path.
    ///
    /// Pure and deterministic: the same name always maps to the same path.
    /// Never touches the filesystem.
    fn cache_path_sync(&self, name: &str) -> PathBuf;

    /// Check whether a target name is already materialized.
    async fn is_cached(&self, name: &str) -> Result<Cached>;

    /// Persist generated text at an address.
    ///
    /// Concurrent calls for the same address collapse to a single physical
    /// write; later callers observe [`StoreOutcome::Deduplicated`].
    async fn store(&self, address: &Address, contents: String) -> Result<StoreOutcome>;
}
