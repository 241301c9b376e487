//! In-memory cache store for exporter tests.
//!
//! Enabled through the `testing` feature. The store records every physical
//! write and lets tests pin the sync path mapping, pre-seed cached names,
//! force the indeterminate existence answer, and inject I/O failures into
//! the existence check or the write path.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::{Address, CacheStore, Cached, Error, Result, StoreOutcome};

/// Cache store backed by maps instead of a filesystem.
#[derive(Debug, Default)]
pub struct MemoryCache {
    paths: BTreeMap<String, PathBuf>,
    indeterminate: HashSet<String>,
    failing_probe: HashSet<String>,
    failing_store: HashSet<String>,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    cached: HashSet<String>,
    writes: Vec<(String, String)>,
}

impl MemoryCache {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the sync path mapping for a logical name.
    pub fn map_name(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(name.into(), path.into());
        self
    }

    /// Pre-seed a name as already materialized.
    pub fn with_cached(self, name: impl Into<String>) -> Self {
        self.lock().cached.insert(name.into());
        self
    }

    /// Make existence checks for a name answer [`Cached::Indeterminate`].
    pub fn with_indeterminate(mut self, name: impl Into<String>) -> Self {
        self.indeterminate.insert(name.into());
        self
    }

    /// Make existence checks for a name fail with [`Error::Probe`].
    pub fn with_failing_probe(mut self, name: impl Into<String>) -> Self {
        self.failing_probe.insert(name.into());
        self
    }

    /// Make stores targeting a name's address fail with [`Error::Write`].
    ///
    /// Accepts the raw output name; the normalized address form is matched
    /// as well.
    pub fn with_failing_store(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.failing_store
            .insert(Address::for_output(&name).as_str().to_string());
        self.failing_store.insert(name);
        self
    }

    /// Number of physical writes recorded so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes.len()
    }

    /// Recorded physical writes as `(address, contents)` pairs.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.lock().writes.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    fn cache_path_sync(&self, name: &str) -> PathBuf {
        match self.paths.get(name) {
            Some(path) => path.clone(),
            None => Path::new("/").join(name.replace(':', "/")),
        }
    }

    async fn is_cached(&self, name: &str) -> Result<Cached> {
        if self.failing_probe.contains(name) {
            return Err(Error::Probe {
                path: self.cache_path_sync(name),
                source: std::io::Error::other("synthetic probe failure"),
            });
        }
        if self.indeterminate.contains(name) {
            return Ok(Cached::Indeterminate);
        }
        let normalized = Address::for_output(name);
        let state = self.lock();
        if state.cached.contains(name) || state.cached.contains(normalized.as_str()) {
            Ok(Cached::Present)
        } else {
            Ok(Cached::Absent)
        }
    }

    async fn store(&self, address: &Address, contents: String) -> Result<StoreOutcome> {
        if self.failing_store.contains(address.as_str()) {
            return Err(Error::Write {
                path: PathBuf::from(address.as_str()),
                source: std::io::Error::other("synthetic write failure"),
            });
        }
        let mut state = self.lock();
        if !state.cached.insert(address.as_str().to_string()) {
            return Ok(StoreOutcome::Deduplicated);
        }
        state.writes.push((address.as_str().to_string(), contents));
        Ok(StoreOutcome::Stored)
    }
}
