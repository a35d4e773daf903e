//! Domain types for the shop backend API.
//!
//! Wire shapes follow the backend contract: response fields are plain
//! lowercase, request bodies use camelCase keys.

use lavka_core::{ItemId, Price, ProductId};
use serde::{Deserialize, Serialize};

/// A cart line as reported by `GET /api/cart`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartItem {
    /// Cart line ID (distinct from the product ID).
    pub id: ItemId,
    /// Product name for display.
    pub name: String,
    /// Product image URL.
    pub image: String,
    /// Unit price.
    pub price: Price,
    /// Line quantity, at least 1.
    pub quantity: u32,
}

/// Full cart snapshot returned by the backend.
///
/// Item order is the server's order and is preserved as-is. The total is
/// authoritative - the storefront never recomputes it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartPayload {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: Price,
}

/// A catalog product returned by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: Price,
}

/// Generic mutation acknowledgement.
///
/// `count` is only present on `POST /api/cart/add` and carries the new cart
/// item count for the badge.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub count: Option<u32>,
}

/// Request body for `POST /api/cart/add`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest<'a> {
    pub product_id: &'a ProductId,
    pub quantity: u32,
}

/// Request body for `POST /api/cart/update`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityRequest<'a> {
    pub item_id: &'a ItemId,
    pub quantity: u32,
}

/// Request body for `POST /api/favorites/toggle`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteRequest<'a> {
    pub product_id: &'a ProductId,
}
