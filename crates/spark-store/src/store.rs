//! # Cart Store
//!
//! The sole owner of the live cart: every read and write of cart contents
//! goes through `CartStore`.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Operations                             │
//! │                                                                     │
//! │  UI Event              Operation              State Change          │
//! │  ────────              ─────────              ────────────          │
//! │                                                                     │
//! │  Click Product ──────► add_item() ──────────► line added/qty + 1    │
//! │  Change Quantity ────► update_quantity() ───► qty set exactly       │
//! │  Click Remove ───────► remove_item() ───────► line removed          │
//! │  Click Clear ────────► clear() ─────────────► items emptied         │
//! │  Click Checkout ─────► checkout() ──────────► (read only)           │
//! │  Render ─────────────► view() ──────────────► (read only)           │
//! │                                                                     │
//! │  Every mutation: lock → mutate → recompute → persist → signal.      │
//! │  The lock is held across the persist await, so on an async medium   │
//! │  the "last successful mutation wins" ordering still holds.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Construction
//! The store is built explicitly and passed by reference to whatever
//! UI-binding layer needs it. There is no global singleton; tests construct
//! as many isolated stores as they like.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use ts_rs::TS;

use spark_core::validation::validate_product;
use spark_core::{Cart, CartPhase, CoreError, LineItem, Money, Product};

use crate::action::CartAction;
use crate::config::CartConfig;
use crate::error::{StoreError, StoreResult};
use crate::medium::StorageMedium;
use crate::notify::{Notice, Notifier};

// =============================================================================
// Renderer DTOs
// =============================================================================

/// Aggregates plus their fixed display rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Σ(price × quantity) in minor units.
    pub total: Money,

    /// Σ(quantity) over all lines, the cart badge number.
    pub item_count: i64,

    /// `total` in the fixed display format, e.g. `"₹160.00"`.
    pub display_total: String,
}

/// Everything the renderer needs to redraw the cart panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
    /// Empty-state placeholder vs list view.
    pub phase: CartPhase,
}

/// What checkout hands to the (stubbed) submission step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub items: Vec<LineItem>,
    pub total: Money,
    pub item_count: i64,
}

// =============================================================================
// Cart Store
// =============================================================================

/// Owns the live cart, its persistence round-trip, and its signal surface.
pub struct CartStore {
    /// The live cart. A tokio mutex because it stays locked across the
    /// persist await; mutations are atomic with respect to each other.
    cart: Mutex<Cart>,

    /// Where snapshots go (SQLite in production, memory in tests).
    medium: Arc<dyn StorageMedium>,

    /// Where user-facing signals go.
    notifier: Arc<dyn Notifier>,

    config: CartConfig,
}

impl CartStore {
    /// Opens a store, restoring the persisted snapshot.
    ///
    /// ## Restore Contract
    /// - Missing key → empty cart
    /// - Medium unreachable → empty cart (`warn!`)
    /// - Unparsable payload → empty cart (`warn!`)
    ///
    /// Never returns an error for any of those: a shopper with corrupt
    /// storage gets a working, empty cart, not a broken page.
    pub async fn open(
        medium: Arc<dyn StorageMedium>,
        notifier: Arc<dyn Notifier>,
        config: CartConfig,
    ) -> Self {
        let cart = match medium.get(&config.storage_key).await {
            Ok(Some(payload)) => match serde_json::from_str::<Cart>(&payload) {
                Ok(cart) => {
                    debug!(
                        items = cart.items.len(),
                        item_count = cart.item_count,
                        "Restored cart snapshot"
                    );
                    cart
                }
                Err(err) => {
                    warn!(error = %err, "Discarding corrupt cart snapshot");
                    Cart::new()
                }
            },
            Ok(None) => {
                debug!("No cart snapshot found, starting empty");
                Cart::new()
            }
            Err(err) => {
                warn!(error = %err, "Storage unavailable, starting with empty cart");
                Cart::new()
            }
        };

        info!(store = %config.store_name, "Cart session opened");

        CartStore {
            cart: Mutex::new(cart),
            medium,
            notifier,
            config,
        }
    }

    /// The widget configuration this store was built with.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Same id already present: that line's quantity += 1
    /// - Otherwise: new line with quantity 1, appended in insertion order
    /// - Emits the "added" signal on success
    ///
    /// A malformed product (empty id, negative price) is rejected before any
    /// state changes.
    pub async fn add_item(&self, product: &Product) -> StoreResult<CartView> {
        validate_product(product).map_err(CoreError::from)?;

        debug!(id = %product.id, name = %product.name, "add_item");

        let mut cart = self.cart.lock().await;
        cart.add_item(product);
        self.persist(&cart).await?;

        self.notifier.notify(Notice::success("Added to cart!"));
        Ok(self.view_of(&cart))
    }

    /// Removes the line matching `id`.
    ///
    /// ## Behavior
    /// - Unknown id: silent no-op on the items, but the cart is still
    ///   recomputed and persisted, and the "removed" signal still fires with
    ///   a generic label
    pub async fn remove_item(&self, id: &str) -> StoreResult<CartView> {
        debug!(id = %id, "remove_item");

        let mut cart = self.cart.lock().await;
        let removed = cart.remove_item(id);
        self.persist(&cart).await?;

        let label = removed
            .map(|item| item.name)
            .unwrap_or_else(|| "Item".to_string());
        self.notifier
            .notify(Notice::error(format!("Removed {} from cart!", label)));
        Ok(self.view_of(&cart))
    }

    /// Sets the quantity of the line matching `id` to exactly `quantity`.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: equivalent to [`CartStore::remove_item`] (and
    ///   emits that operation's signal)
    /// - Unknown id: silent no-op (recompute + persist still happen)
    /// - No signal on a plain quantity change
    pub async fn update_quantity(&self, id: &str, quantity: i64) -> StoreResult<CartView> {
        if quantity <= 0 {
            return self.remove_item(id).await;
        }

        debug!(id = %id, quantity = quantity, "update_quantity");

        let mut cart = self.cart.lock().await;
        cart.update_quantity(id, quantity);
        self.persist(&cart).await?;

        Ok(self.view_of(&cart))
    }

    /// Empties the cart.
    pub async fn clear(&self) -> StoreResult<CartView> {
        debug!("clear");

        let mut cart = self.cart.lock().await;
        cart.clear();
        self.persist(&cart).await?;

        self.notifier.notify(Notice::error("Cart cleared!"));
        Ok(self.view_of(&cart))
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Begins checkout.
    ///
    /// ## Behavior
    /// - Empty cart: emits the rejection notice and returns
    ///   [`CoreError::EmptyCheckout`]; nothing changes, nothing persists
    /// - Otherwise: emits "Proceeding to checkout..." and returns the
    ///   summary. Submission itself is a stub; the cart is left untouched so
    ///   a failed downstream step loses nothing.
    pub async fn checkout(&self) -> StoreResult<CheckoutSummary> {
        let cart = self.cart.lock().await;

        if cart.is_empty() {
            self.notifier.notify(Notice::error("Your cart is empty!"));
            return Err(StoreError::Core(CoreError::EmptyCheckout));
        }

        info!(
            store = %self.config.store_name,
            items = cart.items.len(),
            total = %self.config.format_price(cart.total),
            "Checkout requested"
        );
        self.notifier
            .notify(Notice::success("Proceeding to checkout..."));

        Ok(CheckoutSummary {
            items: cart.items.clone(),
            total: cart.total,
            item_count: cart.item_count,
        })
    }

    /// Re-persists the current snapshot under the fixed key.
    ///
    /// Every mutation already persists; this exists for hosts that want to
    /// force a write (e.g. before the page unloads).
    pub async fn persist_now(&self) -> StoreResult<()> {
        let cart = self.cart.lock().await;
        self.persist(&cart).await
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Read-only view for the renderer.
    pub async fn view(&self) -> CartView {
        let cart = self.cart.lock().await;
        self.view_of(&cart)
    }

    /// Dispatches a delegated action from the rendering surface.
    ///
    /// `Checkout` is included for completeness; callers that need the
    /// [`CheckoutSummary`] should call [`CartStore::checkout`] directly.
    pub async fn dispatch(&self, action: CartAction) -> StoreResult<CartView> {
        match action {
            CartAction::Add { product } => self.add_item(&product).await,
            CartAction::Remove { id } => self.remove_item(&id).await,
            CartAction::SetQuantity { id, quantity } => self.update_quantity(&id, quantity).await,
            CartAction::Clear => self.clear().await,
            CartAction::Checkout => {
                self.checkout().await?;
                Ok(self.view().await)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Serializes the cart and overwrites the snapshot under the fixed key.
    ///
    /// Called with the session lock held. On failure the in-memory mutation
    /// is kept (matching the source system, where a storage write failure
    /// never rolled back the live object) and the error goes to the caller.
    async fn persist(&self, cart: &Cart) -> StoreResult<()> {
        let payload = serde_json::to_string(cart)?;
        self.medium.set(&self.config.storage_key, &payload).await
    }

    fn view_of(&self, cart: &Cart) -> CartView {
        CartView {
            items: cart.items.clone(),
            totals: CartTotals {
                total: cart.total,
                item_count: cart.item_count,
                display_total: self.config.format_price(cart.total),
            },
            phase: cart.phase(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use crate::notify::{BufferNotifier, NoticeKind};
    use async_trait::async_trait;

    fn product(id: &str, name: &str, price_cents: i64) -> Product {
        Product::new(id, name, Money::from_cents(price_cents), "x.jpg")
    }

    async fn open_store(
        medium: Arc<MemoryMedium>,
        notifier: Arc<BufferNotifier>,
    ) -> CartStore {
        CartStore::open(medium, notifier, CartConfig::default()).await
    }

    #[tokio::test]
    async fn test_add_single_item_scenario() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium.clone(), notifier.clone()).await;

        let view = store.add_item(&product("a", "Rocket", 80)).await.unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, "a");
        assert_eq!(view.items[0].quantity, 1);
        assert_eq!(view.totals.total, Money::from_cents(80));
        assert_eq!(view.totals.item_count, 1);
        assert_eq!(view.phase, CartPhase::NonEmpty);

        let notices = notifier.drain();
        assert_eq!(notices, vec![Notice::success("Added to cart!")]);
    }

    #[tokio::test]
    async fn test_add_same_id_twice_scenario() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium, notifier).await;

        let rocket = product("a", "Rocket", 80);
        store.add_item(&rocket).await.unwrap();
        let view = store.add_item(&rocket).await.unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.totals.total, Money::from_cents(160));
        assert_eq!(view.totals.item_count, 2);
    }

    #[tokio::test]
    async fn test_update_quantity_scenario() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium, notifier).await;

        store.add_item(&product("a", "Rocket", 80)).await.unwrap();
        let view = store.update_quantity("a", 5).await.unwrap();

        assert_eq!(view.items[0].quantity, 5);
        assert_eq!(view.totals.total, Money::from_cents(400));
        assert_eq!(view.totals.display_total, "₹4.00");
    }

    #[tokio::test]
    async fn test_remove_item_empties_cart() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium, notifier.clone()).await;

        store.add_item(&product("a", "Rocket", 80)).await.unwrap();
        store.update_quantity("a", 5).await.unwrap();
        let view = store.remove_item("a").await.unwrap();

        assert!(view.items.is_empty());
        assert_eq!(view.totals.total, Money::zero());
        assert_eq!(view.totals.item_count, 0);
        assert_eq!(view.phase, CartPhase::Empty);

        let notices = notifier.drain();
        assert_eq!(notices.last().unwrap().message, "Removed Rocket from cart!");
    }

    #[tokio::test]
    async fn test_remove_unknown_id_keeps_state_and_uses_generic_label() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium, notifier.clone()).await;

        store.add_item(&product("a", "Rocket", 80)).await.unwrap();
        notifier.drain();

        let view = store.remove_item("zzz").await.unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.totals.total, Money::from_cents(80));
        assert_eq!(view.totals.item_count, 1);

        let notices = notifier.drain();
        assert_eq!(notices[0].message, "Removed Item from cart!");
        assert_eq!(notices[0].kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn test_update_quantity_zero_removes_with_signal() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium, notifier.clone()).await;

        store.add_item(&product("a", "Rocket", 80)).await.unwrap();
        notifier.drain();

        let view = store.update_quantity("a", 0).await.unwrap();

        assert!(view.items.is_empty());
        let notices = notifier.drain();
        assert_eq!(notices[0].message, "Removed Rocket from cart!");
    }

    #[tokio::test]
    async fn test_plain_quantity_change_emits_no_signal() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium, notifier.clone()).await;

        store.add_item(&product("a", "Rocket", 80)).await.unwrap();
        notifier.drain();

        store.update_quantity("a", 3).await.unwrap();

        assert!(notifier.drain().is_empty());
    }

    #[tokio::test]
    async fn test_clear_resets_everything() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium, notifier.clone()).await;

        store.add_item(&product("a", "Rocket", 80)).await.unwrap();
        store.add_item(&product("b", "Sparkler", 20)).await.unwrap();
        notifier.drain();

        let view = store.clear().await.unwrap();

        assert!(view.items.is_empty());
        assert_eq!(view.totals.total, Money::zero());
        assert_eq!(view.totals.item_count, 0);
        assert_eq!(notifier.drain(), vec![Notice::error("Cart cleared!")]);
    }

    #[tokio::test]
    async fn test_persist_restore_round_trip() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());

        {
            let store = open_store(medium.clone(), notifier.clone()).await;
            store.add_item(&product("a", "Rocket", 80)).await.unwrap();
            store.add_item(&product("b", "Sparkler", 20)).await.unwrap();
            store.update_quantity("a", 3).await.unwrap();
        }

        // A fresh session over the same medium sees the same cart.
        let reopened = open_store(medium, notifier).await;
        let view = reopened.view().await;

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].id, "a");
        assert_eq!(view.items[0].quantity, 3);
        assert_eq!(view.totals.total, Money::from_cents(260));
        assert_eq!(view.totals.item_count, 4);
    }

    #[tokio::test]
    async fn test_persist_now_writes_current_snapshot() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium.clone(), notifier).await;

        assert!(medium.is_empty());
        store.persist_now().await.unwrap();

        let payload = medium.get("cart").await.unwrap().unwrap();
        let snapshot: Cart = serde_json::from_str(&payload).unwrap();
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.item_count, 0);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_restores_empty() {
        let medium = Arc::new(MemoryMedium::new());
        medium.set("cart", "{definitely not json").await.unwrap();

        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium, notifier).await;
        let view = store.view().await;

        assert!(view.items.is_empty());
        assert_eq!(view.totals.total, Money::zero());
        assert_eq!(view.phase, CartPhase::Empty);
    }

    #[tokio::test]
    async fn test_unknown_snapshot_fields_are_ignored() {
        let medium = Arc::new(MemoryMedium::new());
        medium
            .set(
                "cart",
                r#"{"items":[{"id":"a","name":"Rocket","price":80,"image":"x.jpg","quantity":2}],"total":160,"itemCount":2,"schemaVersion":9}"#,
            )
            .await
            .unwrap();

        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium, notifier).await;
        let view = store.view().await;

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.totals.total, Money::from_cents(160));
        assert_eq!(view.totals.item_count, 2);
    }

    #[tokio::test]
    async fn test_checkout_on_empty_cart_is_rejected() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium.clone(), notifier.clone()).await;

        let err = store.checkout().await.unwrap_err();

        assert!(err.is_empty_checkout());
        assert_eq!(notifier.drain(), vec![Notice::error("Your cart is empty!")]);
        // Nothing was persisted by the rejected checkout.
        assert!(medium.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_returns_summary_without_mutating() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium.clone(), notifier.clone()).await;

        store.add_item(&product("a", "Rocket", 80)).await.unwrap();
        store.update_quantity("a", 2).await.unwrap();
        let before = medium.get("cart").await.unwrap();
        notifier.drain();

        let summary = store.checkout().await.unwrap();

        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.total, Money::from_cents(160));
        assert_eq!(summary.item_count, 2);
        assert_eq!(
            notifier.drain(),
            vec![Notice::success("Proceeding to checkout...")]
        );
        // Checkout is read-only: the snapshot is byte-identical.
        assert_eq!(medium.get("cart").await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_malformed_product_is_rejected_before_mutation() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium.clone(), notifier.clone()).await;

        let bad = Product::new("", "Rocket", Money::from_cents(80), "x.jpg");
        let err = store.add_item(&bad).await.unwrap_err();

        assert!(matches!(err, StoreError::Core(CoreError::Validation(_))));
        assert!(store.view().await.items.is_empty());
        assert!(notifier.drain().is_empty());
        assert!(medium.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_covers_every_action() {
        let medium = Arc::new(MemoryMedium::new());
        let notifier = Arc::new(BufferNotifier::new());
        let store = open_store(medium, notifier).await;

        let rocket = product("a", "Rocket", 80);
        store
            .dispatch(CartAction::Add {
                product: rocket.clone(),
            })
            .await
            .unwrap();
        store
            .dispatch(CartAction::SetQuantity {
                id: "a".to_string(),
                quantity: 4,
            })
            .await
            .unwrap();

        let view = store.dispatch(CartAction::Checkout).await.unwrap();
        assert_eq!(view.totals.total, Money::from_cents(320));

        store
            .dispatch(CartAction::Remove {
                id: "a".to_string(),
            })
            .await
            .unwrap();
        let view = store.dispatch(CartAction::Clear).await.unwrap();
        assert_eq!(view.phase, CartPhase::Empty);
    }

    // -------------------------------------------------------------------------
    // Persist-failure behavior
    // -------------------------------------------------------------------------

    /// A medium whose writes always fail, for exercising the degraded path.
    struct ReadOnlyMedium;

    #[async_trait]
    impl StorageMedium for ReadOnlyMedium {
        async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::QueryFailed("read-only medium".to_string()))
        }

        async fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::QueryFailed("read-only medium".to_string()))
        }
    }

    #[tokio::test]
    async fn test_persist_failure_keeps_in_memory_mutation() {
        let notifier = Arc::new(BufferNotifier::new());
        let store = CartStore::open(
            Arc::new(ReadOnlyMedium),
            notifier.clone(),
            CartConfig::default(),
        )
        .await;

        let err = store.add_item(&product("a", "Rocket", 80)).await.unwrap_err();
        assert!(matches!(err, StoreError::QueryFailed(_)));

        // The live cart kept the mutation; only the write failed. No
        // success signal fired for the failed persist.
        let view = store.view().await;
        assert_eq!(view.items.len(), 1);
        assert!(notifier.drain().is_empty());
    }
}
