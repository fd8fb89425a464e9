//! # Storage Medium
//!
//! The key-value storage contract the cart persists itself through.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Storage Medium Contract                        │
//! │                                                                     │
//! │  CartStore ──► StorageMedium (trait)                                │
//! │                     │                                               │
//! │        ┌────────────┴────────────┐                                  │
//! │        ▼                         ▼                                  │
//! │  MemoryMedium              SqliteMedium                             │
//! │  (HashMap; tests,          (kv_entries table; durable               │
//! │   unavailable-storage       analog of browser local                 │
//! │   fallback)                 storage)                                │
//! │                                                                     │
//! │  One fixed key, whole-snapshot overwrite on every write.            │
//! │  Shared keys across contexts stay last-write-wins by design.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod memory;
mod sqlite;

pub use memory::MemoryMedium;
pub use sqlite::SqliteMedium;

use async_trait::async_trait;

use crate::error::StoreResult;

/// A persistent key-value store with string payloads.
///
/// Mirrors the browser local-storage surface the widget was designed
/// against: get / set / remove, strings only.
#[async_trait]
pub trait StorageMedium: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any prior value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key` if present.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}
