//! # Domain Types
//!
//! Product intake types and the line-identifier policy.
//!
//! ## Where Products Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Product Intake                                 │
//! │                                                                     │
//! │  Storefront page (DOM)                                              │
//! │       │  scraper reads .product-name / img src from a card          │
//! │       ▼                                                             │
//! │  { name?, image? }   ← either may be missing on a card              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Product::scanned(name, image, &policy)  ← THIS MODULE              │
//! │       │   • fills missing name/image with defaults                  │
//! │       │   • applies the demo pricing policy                         │
//! │       │   • assigns a fresh line identifier                         │
//! │       ▼                                                             │
//! │  Product { id, name, price, image }  ──►  Cart::add_item            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifier Policy
//! A line identifier is the current Unix-epoch milliseconds plus a
//! 9-character random suffix: `1722945600000-4fa3b2c1d`. Practically unique
//! within a browsing session; collisions are accepted risk, not guarded
//! against.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::{DEFAULT_PRODUCT_IMAGE, DEFAULT_PRODUCT_NAME, DEMO_PRICE_CENTS};

// =============================================================================
// Pricing Policy
// =============================================================================

/// How a scanned product gets its unit price.
///
/// The storefront is a demo: the original page assigns a fixed price to every
/// card regardless of what is printed on it. That behavior is preserved as an
/// explicit, configurable policy instead of a magic number in the scraper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum PricingPolicy {
    /// Every scanned product gets this fixed unit price.
    FixedDemo(Money),
}

impl PricingPolicy {
    /// Resolves the unit price for a scanned card.
    pub fn unit_price(&self) -> Money {
        match self {
            PricingPolicy::FixedDemo(price) => *price,
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy::FixedDemo(Money::from_cents(DEMO_PRICE_CENTS))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as handed to the cart by the page scraper.
///
/// Carries no quantity: adding the same product twice increments the existing
/// line instead of duplicating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Line identifier, assigned at creation time (see [`generate_line_id`]).
    pub id: String,

    /// Display name shown in the cart panel.
    pub name: String,

    /// Unit price in minor units.
    pub price: Money,

    /// Image reference/URL (display only).
    pub image: String,
}

impl Product {
    /// Creates a product with explicit fields.
    ///
    /// ## Example
    /// ```rust
    /// use spark_core::money::Money;
    /// use spark_core::types::Product;
    ///
    /// let rocket = Product::new("a", "Rocket", Money::from_cents(80), "x.jpg");
    /// assert_eq!(rocket.id, "a");
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }

    /// Builds a product from whatever the scraper found on a card.
    ///
    /// ## Behavior
    /// - Missing name → [`DEFAULT_PRODUCT_NAME`]
    /// - Missing image → [`DEFAULT_PRODUCT_IMAGE`]
    /// - Price always comes from the pricing policy (demo behavior)
    /// - A fresh line identifier is assigned
    pub fn scanned(name: Option<&str>, image: Option<&str>, policy: &PricingPolicy) -> Self {
        Product {
            id: generate_line_id(),
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(DEFAULT_PRODUCT_NAME)
                .to_string(),
            price: policy.unit_price(),
            image: image
                .map(str::trim)
                .filter(|i| !i.is_empty())
                .unwrap_or(DEFAULT_PRODUCT_IMAGE)
                .to_string(),
        }
    }
}

// =============================================================================
// Line Identifiers
// =============================================================================

/// Generates a fresh line identifier: epoch milliseconds + random suffix.
///
/// ## Example Output
/// `"1722945600000-4fa3b2c1d"`
///
/// ## Uniqueness
/// Good enough for one browsing session. Two calls in the same millisecond
/// still differ in the random suffix; a collision would merge two lines,
/// which the product owner has accepted as a non-risk for a demo store.
pub fn generate_line_id() -> String {
    line_id_from_parts(Utc::now().timestamp_millis(), &random_suffix())
}

/// Deterministic half of the identifier policy, split out for tests.
pub(crate) fn line_id_from_parts(millis: i64, suffix: &str) -> String {
    format!("{}-{}", millis, suffix)
}

/// Nine characters of randomness, taken from a v4 UUID's hex form.
fn random_suffix() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..9].to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
