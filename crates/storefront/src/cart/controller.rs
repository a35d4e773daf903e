//! Cart controller: forwards user intents to the backend and keeps the
//! rendered cart consistent with server state.

use std::sync::{PoisonError, RwLock};

use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use lavka_core::{ItemId, ProductId};

use crate::api::ApiClient;
use crate::notify::Notifier;

use super::{CartState, CartView};

// User-facing message texts (the shop fronts a Russian-language catalog).
const MSG_ITEM_ADDED: &str = "Товар добавлен в корзину";
const MSG_ITEM_REMOVED: &str = "Товар удален из корзины";
const MSG_CART_CLEARED: &str = "Корзина очищена";
const MSG_CART_EMPTY: &str = "Корзина пуста";
const MSG_ADD_FAILED: &str = "Ошибка при добавлении товара";
const MSG_REMOVE_FAILED: &str = "Ошибка при удалении товара";
const MSG_UPDATE_FAILED: &str = "Ошибка при обновлении количества";
const MSG_LOAD_FAILED: &str = "Ошибка при загрузке корзины";
const MSG_CLEAR_FAILED: &str = "Ошибка при очистке корзины";
const MSG_CHECKOUT_FAILED: &str = "Ошибка при оформлении заказа";

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Order created; navigate to the checkout page.
    Redirect(Url),
    /// Nothing to order; no request was issued.
    EmptyCart,
    /// The backend refused or the request failed; stay on the cart page.
    Failed,
}

/// Owns the last known-good cart state and the backend round trips.
///
/// Constructed once and shared through `AppState` - an explicit handle, not a
/// global. All mutations are serialized behind one lock, so two overlapping
/// actions on the same cart cannot finish out of order; the backend still
/// arbitrates across processes.
pub struct CartController {
    api: ApiClient,
    notifier: Notifier,
    checkout_url: Url,
    state: RwLock<CartState>,
    mutation: Mutex<()>,
}

impl CartController {
    /// Create a controller over the given backend client.
    #[must_use]
    pub fn new(api: ApiClient, notifier: Notifier, checkout_url: Url) -> Self {
        Self {
            api,
            notifier,
            checkout_url,
            state: RwLock::new(CartState::default()),
            mutation: Mutex::new(()),
        }
    }

    /// Snapshot view of the last known-good state. Pure rendering.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::from(&*self.read_state())
    }

    /// Badge value: sum of line quantities.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.read_state().items.iter().map(|item| item.quantity).sum()
    }

    /// Fetch the cart and replace local state.
    ///
    /// On failure the previous state stays on screen (stale) and an error
    /// message is queued.
    #[instrument(skip(self))]
    pub async fn load_cart(&self) -> CartView {
        self.reload(MSG_LOAD_FAILED).await;
        self.view()
    }

    /// Add a product, then re-fetch the cart.
    ///
    /// Returns the server-reported item count on success so callers can
    /// update the badge without waiting for another fetch.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_item(&self, product_id: &ProductId, quantity: u32) -> Option<u32> {
        let _guard = self.mutation.lock().await;
        match self.api.add_to_cart(product_id, quantity).await {
            Ok(count) => {
                self.reload(MSG_LOAD_FAILED).await;
                self.notifier.success(MSG_ITEM_ADDED);
                count
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to add item to cart");
                self.notifier.error(MSG_ADD_FAILED);
                None
            }
        }
    }

    /// Remove a cart line, then re-fetch the cart.
    #[instrument(skip(self), fields(item_id = %item_id))]
    pub async fn remove_item(&self, item_id: &ItemId) {
        let _guard = self.mutation.lock().await;
        match self.api.remove_from_cart(item_id).await {
            Ok(()) => {
                self.reload(MSG_LOAD_FAILED).await;
                self.notifier.success(MSG_ITEM_REMOVED);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to remove item from cart");
                self.notifier.error(MSG_REMOVE_FAILED);
            }
        }
    }

    /// Set a line quantity, then re-fetch the cart silently (no success
    /// message).
    ///
    /// Quantities below 1 are dropped before any network I/O.
    #[instrument(skip(self), fields(item_id = %item_id))]
    pub async fn update_quantity(&self, item_id: &ItemId, quantity: i64) {
        if quantity < 1 {
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let _guard = self.mutation.lock().await;
        match self.api.update_quantity(item_id, quantity).await {
            Ok(()) => self.reload(MSG_LOAD_FAILED).await,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to update quantity");
                self.notifier.error(MSG_UPDATE_FAILED);
            }
        }
    }

    /// Empty the cart.
    ///
    /// On success local state is reset without a re-fetch - an empty cart is
    /// the one state the storefront can represent on its own.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) {
        let _guard = self.mutation.lock().await;
        match self.api.clear_cart().await {
            Ok(()) => {
                *self.write_state() = CartState::default();
                self.notifier.success(MSG_CART_CLEARED);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to clear cart");
                self.notifier.error(MSG_CLEAR_FAILED);
            }
        }
    }

    /// Create an order from the current cart.
    ///
    /// An empty cart short-circuits: a message is queued and no request is
    /// issued.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> CheckoutOutcome {
        let _guard = self.mutation.lock().await;
        if self.read_state().items.is_empty() {
            self.notifier.success(MSG_CART_EMPTY);
            return CheckoutOutcome::EmptyCart;
        }

        match self.api.create_order().await {
            Ok(()) => CheckoutOutcome::Redirect(self.checkout_url.clone()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create order");
                self.notifier.error(MSG_CHECKOUT_FAILED);
                CheckoutOutcome::Failed
            }
        }
    }

    /// Re-fetch the cart, replacing state on success and queueing
    /// `failure_message` otherwise.
    async fn reload(&self, failure_message: &str) {
        match self.api.get_cart().await {
            Ok(payload) => {
                *self.write_state() = CartState {
                    items: payload.items,
                    total: payload.total,
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load cart");
                self.notifier.error(failure_message);
            }
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, CartState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, CartState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
