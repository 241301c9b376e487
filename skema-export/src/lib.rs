//! Export orchestration and import path resolution for skema.
//!
//! This crate is the export stage of the schema-to-source generator: given a
//! resolved [`Document`](skema_model::Document), it decides whether the
//! namespace's output still needs generating, renders it through a
//! format-specific [`ExportFormat`], and hands the text to the cache store
//! exactly once. Already-materialized namespaces are skipped without
//! rendering.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use skema_cache::FileSystemCache;
//! use skema_export::Exporter;
//!
//! let store = Arc::new(FileSystemCache::new("cache"));
//! let mut exporter = Exporter::new(document, store, format);
//! let outcome = exporter.prepare().await?;
//! ```
//!
//! Many exporters (one per namespace) may run concurrently against one
//! shared store; [`export_all`] drives a whole schema that way.

mod driver;
mod exporter;
mod resolver;

pub use driver::export_all;
pub use exporter::{ExportContext, ExportFormat, Exporter, Prepared};
