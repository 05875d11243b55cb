//! Settings Sync Library
//!
//! This crate keeps a persisted settings store and a transient, editable
//! view-state in sync: fields are decoded into view representation on
//! load, enriched asynchronously from platform capability probes, and
//! written back through the same codecs in a single apply transaction.

pub mod codec;
pub mod constants;
pub mod domain;
pub mod error;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

pub use error::{Error, Result};
pub use state::{SettingsSession, SettingsViewState};
pub use store::{ConfigStore, JsonConfigStore, MemoryConfigStore};
