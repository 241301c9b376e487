//! Whole-schema export driver.

use std::sync::Arc;

use eyre::Result;
use skema_cache::CacheStore;
use skema_model::Document;

use crate::{ExportFormat, Exporter, Prepared};

/// Export every document concurrently against one shared store.
///
/// One exporter is spawned per document; no ordering is guaranteed between
/// independent namespaces, and none is needed once the model is resolved.
/// The shared store alone deduplicates writes if two documents race on the
/// same output name. Outcomes are returned in input order; the first
/// exporter failure aborts the call, leaving other namespaces' writes to the
/// store's own semantics.
pub async fn export_all<F>(
    documents: Vec<Arc<Document>>,
    store: Arc<dyn CacheStore>,
    format: F,
) -> Result<Vec<Prepared>>
where
    F: ExportFormat + Clone + 'static,
{
    let mut handles = Vec::with_capacity(documents.len());
    for doc in documents {
        let mut exporter = Exporter::new(doc, Arc::clone(&store), format.clone());
        handles.push(tokio::spawn(async move { exporter.prepare().await }));
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        outcomes.push(handle.await??);
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use skema_cache::testing::MemoryCache;
    use skema_model::Namespace;

    use super::*;
    use crate::ExportContext;

    #[derive(Clone)]
    struct StubFormat;

    impl ExportFormat for StubFormat {
        fn out_name(&self, namespace_name: &str) -> String {
            format!("{namespace_name}.txt")
        }

        fn import_line(&self, alias: &str, relative_path: &str, _full_name: &str) -> String {
            format!("use {alias} = '{relative_path}';")
        }

        fn contents(&self, cx: &ExportContext<'_>) -> String {
            format!("// {}\n", cx.namespace().name())
        }
    }

    #[tokio::test]
    async fn test_export_all_writes_each_namespace_once() {
        let docs: Vec<Arc<Document>> = ["urn:a", "urn:b", "urn:c"]
            .into_iter()
            .map(|name| Arc::new(Document::new(Namespace::new(name))))
            .collect();
        let store = Arc::new(MemoryCache::new());

        let outcomes = export_all(docs, store.clone(), StubFormat).await.unwrap();
        assert_eq!(outcomes, vec![Prepared::Written; 3]);
        assert_eq!(store.write_count(), 3);
    }

    #[tokio::test]
    async fn test_export_all_dedups_same_namespace() {
        let doc = Arc::new(Document::new(Namespace::new("urn:a")));
        let docs = vec![Arc::clone(&doc), doc];
        let store = Arc::new(MemoryCache::new());

        export_all(docs, store.clone(), StubFormat).await.unwrap();
        assert_eq!(store.write_count(), 1);
    }
}
