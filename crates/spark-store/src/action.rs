//! # Delegated Actions
//!
//! The single entry point the rendering surface funnels every cart event
//! through.
//!
//! ## Why Actions Instead of Inline Handlers?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Event Delegation                                    │
//! │                                                                     │
//! │  BEFORE (fragile): rendered HTML embeds method calls as strings     │
//! │    <button onclick="cart.updateQuantity('1722...-4fa', 3)">         │
//! │                                                                     │
//! │  AFTER: rendered HTML carries only data attributes                  │
//! │    <button data-action="setQuantity" data-id="1722...-4fa"          │
//! │            data-quantity="3">                                       │
//! │                                                                     │
//! │  One delegated listener reads the attributes, builds a CartAction,  │
//! │  and calls CartStore::dispatch. Rendering strings never contain     │
//! │  executable code.                                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The serde layout matches the data-attribute names, so the listener can
//! deserialize the dataset object directly.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use spark_core::Product;

/// Every mutation the rendering surface can request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum CartAction {
    /// Add a scanned product (quantity is always 1 per click).
    Add { product: Product },

    /// Remove the line matching `id`.
    Remove { id: String },

    /// Set the line's quantity to exactly `quantity` (≤ 0 removes).
    SetQuantity { id: String, quantity: i64 },

    /// Empty the cart.
    Clear,

    /// Begin checkout (rejected while empty).
    Checkout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_core::Money;

    #[test]
    fn test_action_tag_layout() {
        let action = CartAction::SetQuantity {
            id: "a".to_string(),
            quantity: 3,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "setQuantity");
        assert_eq!(json["id"], "a");
        assert_eq!(json["quantity"], 3);
    }

    #[test]
    fn test_action_round_trip() {
        let action = CartAction::Add {
            product: Product::new("a", "Rocket", Money::from_cents(80), "x.jpg"),
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: CartAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_unit_variants_serialize() {
        let json = serde_json::to_value(&CartAction::Clear).unwrap();
        assert_eq!(json["action"], "clear");
    }
}
