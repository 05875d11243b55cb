//! Store - Persisted Configuration Access
//!
//! The canonical settings live behind the `ConfigStore` trait: the session
//! receives an injected store handle and is the only writer. Two
//! implementations ship with the crate: an in-memory store for tests and
//! embedding, and a JSON file store under the platform data directory.

pub mod json;
pub mod memory;

pub use json::JsonConfigStore;
pub use memory::MemoryConfigStore;

use crate::domain::SettingsConfig;
use crate::error::Result;

/// Handle to the canonical persisted settings.
///
/// `config_mut` mutates the live snapshot only; nothing reaches durable
/// storage until `persist`. `reload` discards unpersisted mutations.
pub trait ConfigStore: Send {
    /// Current live snapshot
    fn config(&self) -> &SettingsConfig;

    /// Mutable access to the live snapshot
    fn config_mut(&mut self) -> &mut SettingsConfig;

    /// Write the live snapshot to durable storage
    fn persist(&mut self) -> Result<()>;

    /// Replace the live snapshot with the last persisted values
    fn reload(&mut self) -> Result<()>;

    /// Replace the live snapshot with built-in defaults (not persisted)
    fn reset_to_defaults(&mut self);
}
