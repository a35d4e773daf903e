//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::cart::CartController;
use crate::config::StorefrontConfig;
use crate::notify::Notifier;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Owns the single cart controller instance for
/// the page lifecycle - handlers borrow it, nothing reaches for a global.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    api: ApiClient,
    notifier: Notifier,
    cart: CartController,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let api = ApiClient::new(&config.api_base_url);
        let notifier = Notifier::new(config.message_ttl);
        let cart = CartController::new(
            api.clone(),
            notifier.clone(),
            config.checkout_url.clone(),
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                notifier,
                cart,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Get a reference to the message queue.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }

    /// Get a reference to the cart controller.
    #[must_use]
    pub fn cart(&self) -> &CartController {
        &self.inner.cart
    }
}
