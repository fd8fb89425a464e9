//! # spark-store: Storage Medium and Cart Session for Spark Cart
//!
//! This crate owns every side effect in the workspace: the key-value storage
//! medium, the live `CartStore` session, the delegated action dispatcher,
//! and the user-facing signal surface.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Spark Cart Data Flow                           │
//! │                                                                     │
//! │  UI event (click, key press)                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  spark-store (THIS CRATE)                   │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐   ┌───────────┐   ┌──────────────────┐     │   │
//! │  │   │  action   │──►│   store   │──►│     medium       │     │   │
//! │  │   │CartAction │   │ CartStore │   │ StorageMedium    │     │   │
//! │  │   │ dispatch  │   │ lock+     │   │ Memory / SQLite  │     │   │
//! │  │   └───────────┘   │ persist   │   └──────────────────┘     │   │
//! │  │                   └─────┬─────┘                            │   │
//! │  │                         │ signals                          │   │
//! │  │                   ┌─────▼─────┐                            │   │
//! │  │                   │  notify   │ → transient toast (UI)     │   │
//! │  │                   └───────────┘                            │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  spark-core (pure cart math)                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The CartStore session (restore → mutate → persist → signal)
//! - [`medium`] - StorageMedium trait, memory and SQLite implementations
//! - [`pool`] - SQLite pool creation and configuration
//! - [`migrations`] - Embedded storage migrations
//! - [`action`] - Delegated actions from the rendering surface
//! - [`notify`] - Notice type and Notifier sink
//! - [`config`] - Widget configuration (storage key, display format, pricing)
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use spark_store::{CartConfig, CartStore, SqliteMedium, StoreConfig, TracingNotifier};
//!
//! let config = CartConfig::from_env();
//! let medium = Arc::new(SqliteMedium::open(StoreConfig::new("./data/spark.db")).await?);
//! let notifier = Arc::new(TracingNotifier);
//!
//! let store = CartStore::open(medium, notifier, config).await;
//! let view = store.add_item(&product).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod config;
pub mod error;
pub mod medium;
pub mod migrations;
pub mod notify;
pub mod pool;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use action::CartAction;
pub use config::CartConfig;
pub use error::{StoreError, StoreResult};
pub use medium::{MemoryMedium, SqliteMedium, StorageMedium};
pub use notify::{BufferNotifier, Notice, NoticeKind, Notifier, TracingNotifier};
pub use pool::{KvDatabase, StoreConfig};
pub use store::{CartStore, CartTotals, CartView, CheckoutSummary};
