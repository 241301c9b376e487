//! TypeScript declaration output format for the skema exporter.
//!
//! Renders a namespace's declarations as a `.d.ts` file: a block of
//! `import * as alias from '...'` lines resolved through the exporter's
//! relative path machinery, followed by `export interface` and
//! `export type` declarations.
//!
//! # Usage
//!
//! ```ignore
//! use skema_export::Exporter;
//! use skema_export_typescript::TypeScriptFormat;
//!
//! let mut exporter = Exporter::new(document, store, TypeScriptFormat::new());
//! exporter.prepare().await?;
//! ```

mod format;

pub use format::TypeScriptFormat;
