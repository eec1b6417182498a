//! Persistence boundary: a synchronous string key-value store.
//!
//! The custom-recipe collection and the transient browse state each live
//! under one fixed key. Callers at the boundary decide whether a failure
//! degrades (reads) or surfaces (writes); implementations never panic.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Key holding the serialized custom-recipe collection.
pub const CUSTOM_RECIPES_KEY: &str = "custom-recipes";

/// Key holding transient browse state (query, filters, scroll offset).
pub const BROWSE_STATE_KEY: &str = "browse-state";

#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing medium cannot be used at all. Kept distinct from plain
    /// I/O failure so callers can tell "no data" from "no storage".
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait KeyValueStore {
    /// Fetch the value under `key`, `None` when the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value under `key` wholesale.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
