//! # spark-core: Pure Cart Logic for Spark Cart
//!
//! This crate is the **heart** of Spark Cart. It contains the cart state
//! machine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Spark Cart Architecture                        │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   Storefront Page (DOM)                     │   │
//! │  │   Product Cards ──► Cart Panel ──► Checkout Button          │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ actions / views                    │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                  spark-store (CartStore)                    │   │
//! │  │   dispatch, persist/restore, signals                        │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                    │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │               ★ spark-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌───────────┐  │   │
//! │  │   │  types   │  │  money   │  │   cart   │  │ validation│  │   │
//! │  │   │ Product  │  │  Money   │  │   Cart   │  │   rules   │  │   │
//! │  │   │ LineItem │  │          │  │ CartPhase│  │   checks  │  │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └───────────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, identifier policy)
//! - [`cart`] - The cart state machine and its derived aggregates
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Product intake validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64) to avoid float errors
//! 4. **Derived Aggregates**: `total` and `item_count` are recomputed from the
//!    line items after every mutation, never edited independently
//!
//! ## Example Usage
//!
//! ```rust
//! use spark_core::cart::Cart;
//! use spark_core::money::Money;
//! use spark_core::types::Product;
//!
//! let mut cart = Cart::new();
//! let rocket = Product::new("a", "Rocket", Money::from_cents(80), "x.jpg");
//!
//! cart.add_item(&rocket);
//! cart.add_item(&rocket); // same id: quantity becomes 2
//!
//! assert_eq!(cart.items.len(), 1);
//! assert_eq!(cart.item_count, 2);
//! assert_eq!(cart.total, Money::from_cents(160));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use spark_core::Money` instead of
// `use spark_core::money::Money`

pub use cart::{Cart, CartPhase, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{PricingPolicy, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Display name used when the page scraper cannot find one on a product card.
pub const DEFAULT_PRODUCT_NAME: &str = "Firework Product";

/// Image reference used when a product card carries no image.
pub const DEFAULT_PRODUCT_IMAGE: &str = "images/default-product.jpg";

/// Demo unit price in minor units (80.00 at two decimals).
///
/// The storefront is a demo: every scanned card gets this price regardless of
/// what the page shows. Kept as a constant so the policy stays configurable
/// instead of being buried in the intake code.
pub const DEMO_PRICE_CENTS: i64 = 8000;
