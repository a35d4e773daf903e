//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart (returns cart_items fragment)
//! POST /cart/quantity          - Quantity stepper (display-only, no backend call)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Create order, redirect to the backend checkout page
//!
//! # Search
//! GET  /search                 - Search page
//! GET  /search/results         - Product grid fragment
//!
//! # Favorites
//! POST /favorites/toggle       - Toggle a favorite (returns button fragment)
//!
//! # Messages
//! GET  /notifications          - Active transient messages (fragment)
//! POST /notifications/dismiss  - Dismiss one message by token
//! ```

pub mod cart;
pub mod favorites;
pub mod notifications;
pub mod quantity;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/quantity", post(quantity::stepper))
        .route("/count", get(cart::count))
}

/// Create the search routes router.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search::page))
        .route("/results", get(search::results))
}

/// Create the notification routes router.
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::index))
        .route("/dismiss", post(notifications::dismiss))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout redirect
        .route("/checkout", get(cart::checkout))
        // Search routes
        .nest("/search", search_routes())
        // Favorites
        .route("/favorites/toggle", post(favorites::toggle))
        // Transient messages
        .nest("/notifications", notification_routes())
}
