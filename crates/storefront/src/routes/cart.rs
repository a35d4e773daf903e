//! Cart route handlers.
//!
//! Cart operations use HTMX-style fragments for dynamic updates without full
//! page reloads. Fragments are replaced wholesale, so the markup carries no
//! state of its own and nothing needs re-binding after a swap.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use lavka_core::{ItemId, ProductId};

use crate::cart::{CartView, CheckoutOutcome};
use crate::filters;
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update quantity form data.
///
/// `quantity` stays signed here so a zero or negative submission reaches the
/// controller guard (and is dropped there) instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub item_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub item_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.cart().load_cart().await;
    CartShowTemplate { cart }
}

/// Add item to cart.
///
/// Serves both the cart page and page-level add-to-cart buttons. Returns the
/// count badge with an HTMX trigger so other cart fragments refresh; the
/// badge value is the server-reported count when the backend includes one.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Response {
    let product_id = ProductId::new(form.product_id);
    let quantity = form.quantity.unwrap_or(1);

    let count = state
        .cart()
        .add_item(&product_id, quantity)
        .await
        .unwrap_or_else(|| state.cart().item_count());

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response()
}

/// Update cart line quantity.
///
/// Quantities below 1 never reach the backend; the fragment then simply
/// re-renders the current state.
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateCartForm>) -> Response {
    let item_id = ItemId::new(form.item_id);
    state.cart().update_quantity(&item_id, form.quantity).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: state.cart().view(),
        },
    )
        .into_response()
}

/// Remove item from cart.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Form(form): Form<RemoveFromCartForm>) -> Response {
    let item_id = ItemId::new(form.item_id);
    state.cart().remove_item(&item_id).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: state.cart().view(),
        },
    )
        .into_response()
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Response {
    state.cart().clear_cart().await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: state.cart().view(),
        },
    )
        .into_response()
}

/// Get cart count badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().item_count(),
    }
}

/// Create an order and redirect to the backend checkout page.
///
/// An empty cart never issues a request; the queued message is shown back on
/// the cart page.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Response {
    match state.cart().checkout().await {
        CheckoutOutcome::Redirect(url) => Redirect::to(url.as_str()).into_response(),
        CheckoutOutcome::EmptyCart | CheckoutOutcome::Failed => {
            Redirect::to("/cart").into_response()
        }
    }
}
