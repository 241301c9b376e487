//! Filesystem-backed cache store.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio::fs;

use crate::{Address, CacheStore, Cached, Error, Result, StoreOutcome};

/// Cache store that materializes artifacts under a base directory.
///
/// Logical names are URI-like (`urn:foo:bar`, `http://host/path`); the
/// scheme is stripped and the remaining `:`/`/`-separated segments become
/// directory components under the base. The mapping is pure, so the same
/// name always lands at the same path.
///
/// Writes are atomic (temp file plus rename) and deduplicated through an
/// in-process registry: the second writer for an address returns
/// [`StoreOutcome::Deduplicated`] without touching the disk.
pub struct FileSystemCache {
    base: PathBuf,
    written: Mutex<HashSet<String>>,
}

impl FileSystemCache {
    /// Create a store rooted at the given base directory.
    ///
    /// The directory does not need to exist yet; writes create it on demand.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            written: Mutex::new(HashSet::new()),
        }
    }

    /// Base directory artifacts are materialized under.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn forget(&self, key: &str) {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[async_trait]
impl CacheStore for FileSystemCache {
    fn cache_path_sync(&self, name: &str) -> PathBuf {
        match derive_relative(name) {
            Some(rel) => self.base.join(rel),
            None => self.base.clone(),
        }
    }

    async fn is_cached(&self, name: &str) -> Result<Cached> {
        let Some(rel) = derive_relative(name) else {
            return Ok(Cached::Indeterminate);
        };
        let path = self.base.join(rel);
        match fs::try_exists(&path).await {
            Ok(true) => Ok(Cached::Present),
            Ok(false) => Ok(Cached::Absent),
            Err(source) => Err(Error::Probe { path, source }),
        }
    }

    async fn store(&self, address: &Address, contents: String) -> Result<StoreOutcome> {
        let key = address.as_str().to_string();
        {
            let mut written = self
                .written
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            // Inserting up front also covers in-flight writes.
            if !written.insert(key.clone()) {
                return Ok(StoreOutcome::Deduplicated);
            }
        }

        let Some(rel) = derive_relative(address.as_str()) else {
            self.forget(&key);
            return Err(Error::Unaddressable { name: key });
        };
        let path = self.base.join(rel);
        match write_atomic(&path, &contents).await {
            Ok(()) => Ok(StoreOutcome::Stored),
            Err(source) => {
                // A failed write may be retried by the caller.
                self.forget(&key);
                Err(Error::Write { path, source })
            }
        }
    }
}

/// Derive the cache-relative path for a logical name.
///
/// Returns `None` for names with no usable path components; such names are
/// answered with [`Cached::Indeterminate`] rather than an error.
fn derive_relative(name: &str) -> Option<PathBuf> {
    let trimmed = name.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);

    let mut rel = PathBuf::new();
    for segment in rest.split(['/', ':']) {
        if segment.is_empty() || segment == "." || segment == ".." {
            continue;
        }
        rel.push(segment);
    }
    if rel.as_os_str().is_empty() { None } else { Some(rel) }
}

async fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!("{file_name}.tmp"));
    fs::write(&tmp, contents).await?;
    fs::rename(&tmp, path).await
}
