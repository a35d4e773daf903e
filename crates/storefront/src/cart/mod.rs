//! Cart state, controller and display models.
//!
//! The backend owns the cart; this module keeps the last known-good snapshot
//! and forwards user intents as API calls. Every successful mutation is
//! followed by a full re-fetch - state is replaced wholesale, never patched.

mod controller;
mod view;

pub use controller::{CartController, CheckoutOutcome};
pub use view::{CartItemView, CartView};

use lavka_core::Price;

use crate::api::CartItem;

/// Last known-good cart snapshot.
///
/// `total` is always the value last returned by the backend; it is never
/// computed locally.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total: Price,
}
