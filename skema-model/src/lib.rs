//! Namespace and declaration model for the skema exporter.
//!
//! This crate provides the in-memory representation of a resolved schema
//! consumed by the export stage. The types here carry no I/O and no
//! target-language concerns; they are the single source of truth the
//! exporters read from.
//!
//! # Architecture
//!
//! ```text
//! schema source → resolution (external) → skema-model → skema-export
//! ```
//!
//! The model is read-only for the duration of an export: an [`Exporter`]
//! borrows a [`Document`] and never mutates it.
//!
//! [`Exporter`]: https://docs.rs/skema-export

mod document;
mod namespace;

pub use document::{DeclKind, Document, Field, TypeDecl, TypeRef};
pub use namespace::{Namespace, PRIMITIVE_ALIAS};
