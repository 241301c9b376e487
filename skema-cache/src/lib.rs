//! Content cache addressing and storage for the skema exporter.
//!
//! The export stage talks to its persistence layer through a deliberately
//! narrow surface: a synchronous name-to-path mapping, an asynchronous
//! existence check, and an asynchronous deduplicating write. This crate
//! defines that surface ([`CacheStore`]), the normalized write destination
//! ([`Address`]), and a filesystem-backed implementation
//! ([`FileSystemCache`]).
//!
//! Entries are write-once: the store guarantees at most one physical write
//! per address for its lifetime, even when concurrent callers race on the
//! same name.

mod address;
mod error;
mod fs;
mod store;

#[cfg(feature = "testing")]
pub mod testing;

pub use address::Address;
pub use error::{Error, Result};
pub use fs::FileSystemCache;
pub use store::{CacheStore, Cached, StoreOutcome};
