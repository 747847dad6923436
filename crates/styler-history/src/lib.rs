//! Bounded, persisted generation history
//!
//! The store keeps the most recent generations, newest first, up to a
//! fixed capacity. Every mutation is mirrored to a [`StorageBackend`] on a
//! best-effort basis: a failed write is logged and the in-memory state
//! stays authoritative for the rest of the session, mirroring how a
//! full quota should degrade rather than abort.

mod backend;
mod error;
mod store;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend};
pub use error::StorageError;
pub use store::HistoryStore;
