//! Per-document export orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use eyre::Result;
use skema_cache::{Address, CacheStore, Cached};
use skema_model::{Document, Namespace, PRIMITIVE_ALIAS};

use crate::resolver;

/// Outcome of [`Exporter::prepare`].
///
/// Only [`Prepared::Written`] means content reached the store; the other
/// variants are ordinary no-op control flow, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prepared {
    /// No document is bound to this exporter.
    NoDocument,
    /// The target name is already materialized in the cache.
    AlreadyCached,
    /// The store could not answer the existence check for this name shape.
    Indeterminate,
    /// Content was rendered and handed to the store.
    Written,
}

/// Format-specific hooks the orchestration core depends on.
///
/// One implementation per target output language. The core never touches
/// concrete syntax; it asks the format for the canonical out-name, for one
/// import line at a time, and for the fully rendered document text.
pub trait ExportFormat: Send + Sync {
    /// Canonical output name for a namespace, e.g. the namespace name with a
    /// language-specific suffix appended.
    fn out_name(&self, namespace_name: &str) -> String;

    /// One formatted import line for an alias and its resolved relative path.
    fn import_line(&self, alias: &str, relative_path: &str, full_name: &str) -> String;

    /// Render the full document text.
    ///
    /// Implementations typically emit [`ExportContext::header`] first and
    /// may resolve further paths through [`ExportContext::path_to`].
    fn contents(&self, cx: &ExportContext<'_>) -> String;
}

/// Borrowed view of an export in progress, handed to
/// [`ExportFormat::contents`].
pub struct ExportContext<'a> {
    doc: &'a Document,
    store: &'a dyn CacheStore,
    cache_dir: &'a Path,
    format: &'a dyn ExportFormat,
}

impl ExportContext<'_> {
    /// The document being exported.
    pub fn document(&self) -> &Document {
        self.doc
    }

    /// The namespace being exported.
    pub fn namespace(&self) -> &Namespace {
        self.doc.namespace()
    }

    /// Relative import path from the current namespace's cache directory to
    /// the artifact of the namespace `target_name`.
    ///
    /// Posix-style separators, always an explicit relative reference. No
    /// existence check is performed; the target is expected to be written by
    /// its own exporter.
    pub fn path_to(&self, target_name: &str) -> String {
        resolver::path_to(self.cache_dir, self.store, target_name)
    }

    /// Import lines for every namespace the document actually references,
    /// in ascending alias order.
    ///
    /// The reserved primitive alias has no generated file and is skipped.
    pub fn header(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (alias, full_name) in self.namespace().used_import_tbl() {
            if alias == PRIMITIVE_ALIAS {
                continue;
            }
            let relative_path = self.path_to(full_name);
            lines.push(self.format.import_line(alias, &relative_path, full_name));
        }
        lines
    }
}

/// Exports one document's namespace to the cache store, at most once.
///
/// Bound 1:1 to a document for its lifetime. The cache directory of the
/// namespace's own artifact is derived on the first [`prepare`] call and
/// reused as the reference point for relative path resolution.
///
/// [`prepare`]: Exporter::prepare
pub struct Exporter<F> {
    doc: Option<Arc<Document>>,
    store: Arc<dyn CacheStore>,
    format: F,
    cache_dir: Option<PathBuf>,
}

impl<F: ExportFormat> Exporter<F> {
    /// Bind an exporter to a document.
    pub fn new(doc: Arc<Document>, store: Arc<dyn CacheStore>, format: F) -> Self {
        Self {
            doc: Some(doc),
            store,
            format,
            cache_dir: None,
        }
    }

    /// Create an exporter with no document bound.
    ///
    /// `prepare` on a detached exporter is a silent no-op, so callers may
    /// invoke it speculatively.
    pub fn detached(store: Arc<dyn CacheStore>, format: F) -> Self {
        Self {
            doc: None,
            store,
            format,
            cache_dir: None,
        }
    }

    /// Output namespace contents to the cache, if not already exported.
    ///
    /// Rendering is skipped entirely when the store already holds the target
    /// name or cannot answer for it; rendering can be expensive and may
    /// resolve paths into other namespaces, so the check always comes first.
    /// Store failures propagate unchanged; there is no retry here.
    pub async fn prepare(&mut self) -> Result<Prepared> {
        let Some(doc) = self.doc.clone() else {
            return Ok(Prepared::NoDocument);
        };

        let cache_dir = match &self.cache_dir {
            Some(dir) => dir.clone(),
            None => {
                let dir = self
                    .store
                    .cache_path_sync(doc.namespace().name())
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                self.cache_dir = Some(dir.clone());
                dir
            }
        };

        let out_name = self.format.out_name(doc.namespace().name());
        match self.store.is_cached(&out_name).await? {
            Cached::Present => return Ok(Prepared::AlreadyCached),
            Cached::Indeterminate => return Ok(Prepared::Indeterminate),
            Cached::Absent => {}
        }

        let address = Address::for_output(&out_name);
        let contents = {
            let cx = ExportContext {
                doc: &doc,
                store: self.store.as_ref(),
                cache_dir: &cache_dir,
                format: &self.format,
            };
            self.format.contents(&cx)
        };
        self.store.store(&address, contents).await?;
        Ok(Prepared::Written)
    }
}
