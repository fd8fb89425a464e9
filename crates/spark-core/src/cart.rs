//! # Cart State Machine
//!
//! The cart owns an ordered list of line items plus two derived aggregates.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Phases (presentation only)                  │
//! │                                                                     │
//! │            add_item                                                 │
//! │  ┌───────┐ ───────────────────────────► ┌──────────┐               │
//! │  │ Empty │                              │ NonEmpty │ ◄─┐           │
//! │  └───────┘ ◄─────────────────────────── └──────────┘   │           │
//! │            last item removed / clear()        │        │           │
//! │                                               └────────┘           │
//! │                                        add/remove/update (others)  │
//! │                                                                     │
//! │  These two phases exist only to pick the empty-state placeholder    │
//! │  vs the list view. Nothing else branches on them.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `id` (adding the same id increments quantity by 1)
//! - `quantity` is always ≥ 1; an update that would drive it to ≤ 0 removes
//!   the line instead
//! - `total` and `item_count` are recomputed from the items after every
//!   mutation, never edited independently
//!
//! ## Serde Layout
//! `Cart` serializes to exactly the persisted snapshot format:
//! `{ "items": [...], "total": n, "itemCount": n }`. Every field defaults so
//! a missing or truncated snapshot degrades to the empty cart instead of
//! erroring.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// One distinct product entry in the cart, with its own quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Line identifier (unique within the cart).
    #[serde(default)]
    pub id: String,

    /// Display name, frozen at the time the product was added.
    #[serde(default)]
    pub name: String,

    /// Unit price in minor units, frozen at the time the product was added.
    #[serde(default)]
    pub price: Money,

    /// Image reference (display only).
    #[serde(default)]
    pub image: String,

    /// Quantity in cart, always ≥ 1.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// A line that made it into a snapshot is at least one unit; defaulting a
/// missing quantity to 0 would violate the quantity ≥ 1 invariant on restore.
fn default_quantity() -> i64 {
    1
}

impl LineItem {
    /// Creates a line item from a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Phase
// =============================================================================

/// The two externally meaningful cart conditions.
///
/// Used only to drive presentation (empty-state placeholder vs list view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum CartPhase {
    Empty,
    NonEmpty,
}

// =============================================================================
// Cart
// =============================================================================

/// The cart: ordered line items plus derived aggregates.
///
/// ## Aggregates Are Derived
/// `total` and `item_count` are stored (they are part of the persisted
/// snapshot) but only ever written by [`Cart::recompute`], which every
/// mutation calls before returning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Cart {
    /// Items in insertion order, unique by id.
    pub items: Vec<LineItem>,

    /// Σ(price × quantity) over all items.
    pub total: Money,

    /// Σ(quantity) over all items.
    pub item_count: i64,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product id already present: quantity += 1 (exactly 1, the product
    ///   carries no quantity of its own)
    /// - Otherwise: append a new line with quantity 1, preserving insertion
    ///   order
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(LineItem::from_product(product));
        }
        self.recompute();
    }

    /// Removes the line matching `id`.
    ///
    /// ## Behavior
    /// - Absent id is a silent no-op (aggregates are still recomputed so the
    ///   caller can persist unconditionally)
    ///
    /// ## Returns
    /// The removed line, if any, so the caller can name it in the
    /// user-facing signal.
    pub fn remove_item(&mut self, id: &str) -> Option<LineItem> {
        let removed = self
            .items
            .iter()
            .position(|i| i.id == id)
            .map(|pos| self.items.remove(pos));
        self.recompute();
        removed
    }

    /// Sets the quantity of the line matching `id` to exactly `quantity`.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: equivalent to [`Cart::remove_item`]
    /// - Absent id: silent no-op
    ///
    /// ## Returns
    /// The removed line when the update emptied it out, `None` otherwise.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Option<LineItem> {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
        self.recompute();
        None
    }

    /// Empties the cart and zeroes the aggregates.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Recomputes `total` and `item_count` from the line items.
    ///
    /// Called by every mutation before the caller persists or displays.
    pub fn recompute(&mut self) {
        self.total = self
            .items
            .iter()
            .fold(Money::zero(), |sum, item| sum + item.line_total());
        self.item_count = self.items.iter().map(|i| i.quantity).sum();
    }

    /// Current phase, for presentation.
    pub fn phase(&self) -> CartPhase {
        if self.items.is_empty() {
            CartPhase::Empty
        } else {
            CartPhase::NonEmpty
        }
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
