//! End-to-end export tests for the TypeScript declaration format.
//!
//! These drive a real [`Exporter`] against an in-memory store and check the
//! full rendered `.d.ts` output. Run `cargo insta review` to update
//! snapshots when making intentional changes.

use std::sync::Arc;

use skema_cache::{CacheStore, testing::MemoryCache};
use skema_export::{Exporter, Prepared};
use skema_export_typescript::TypeScriptFormat;
use skema_model::{DeclKind, Document, Field, Namespace, TypeDecl, TypeRef};

fn store() -> Arc<MemoryCache> {
    Arc::new(
        MemoryCache::new()
            .map_name("urn:a", "/out/a")
            .map_name("urn:b", "/out/b"),
    )
}

/// Namespace `urn:a` importing `urn:b` (used) and the primitive
/// pseudo-namespace, with one interface and one alias declaration.
fn document() -> Arc<Document> {
    let mut ns = Namespace::new("urn:a");
    ns.add_used_import("b", "urn:b");
    ns.add_used_import("Primitive", "urn:builtin");

    let mut doc = Document::new(ns);
    doc.push_decl(TypeDecl {
        name: "Doc".to_string(),
        kind: DeclKind::Interface {
            fields: vec![
                Field::required("title", TypeRef::local("string")),
                Field::optional("author", TypeRef::qualified("b", "Person")),
            ],
        },
    });
    doc.push_decl(TypeDecl {
        name: "Title".to_string(),
        kind: DeclKind::Alias {
            target: TypeRef::local("string"),
        },
    });
    Arc::new(doc)
}

async fn export(store: Arc<MemoryCache>) -> String {
    let cache: Arc<dyn CacheStore> = store.clone();
    let mut exporter = Exporter::new(document(), cache, TypeScriptFormat::new());
    assert_eq!(exporter.prepare().await.unwrap(), Prepared::Written);
    store.writes().remove(0).1
}

#[tokio::test]
async fn test_single_import_line_skipping_primitive() {
    let contents = export(store()).await;
    assert!(contents.starts_with("import * as b from './b';\n\n"));
    assert!(!contents.contains("Primitive"));
    assert_eq!(contents.matches("import ").count(), 1);
}

#[tokio::test]
async fn test_output_lands_at_normalized_address() {
    let store = store();
    export(store.clone()).await;
    assert_eq!(store.writes()[0].0, "/urn:a.d.ts");
}

#[tokio::test]
async fn test_rendered_declaration_file() {
    let contents = export(store()).await;
    insta::assert_snapshot!("typescript_declaration_file", contents);
}

#[tokio::test]
async fn test_second_prepare_does_not_write_again() {
    let store = store();
    let cache: Arc<dyn CacheStore> = store.clone();
    let mut exporter = Exporter::new(document(), cache, TypeScriptFormat::new());

    assert_eq!(exporter.prepare().await.unwrap(), Prepared::Written);
    assert_eq!(exporter.prepare().await.unwrap(), Prepared::AlreadyCached);
    assert_eq!(store.write_count(), 1);
}

#[tokio::test]
async fn test_reruns_emit_identical_bytes() {
    let first = export(store()).await;
    let second = export(store()).await;
    assert_eq!(first, second);
}
