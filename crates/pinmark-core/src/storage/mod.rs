//! Storage layer
//!
//! Namespaced JSON record persistence for the bookmark and history stores.
//! Each store exclusively owns one namespace; the persistence layer itself
//! is a passive blob store with no knowledge of store semantics.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{JsonPersistence, BOOKMARKS_NAMESPACE, HISTORY_NAMESPACE};
