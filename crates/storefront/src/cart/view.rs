//! Cart display data for templates.

use crate::api::CartItem;

use super::CartState;

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Unit price, formatted (`100 ₽`).
    pub price: String,
    /// Raw unit price amount for `data-price` attributes (`100`).
    pub price_amount: String,
    pub quantity: u32,
    /// Unit price x quantity, formatted.
    pub line_total: String,
}

/// Cart display data.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Backend-reported total, formatted (`200 ₽`).
    pub total: String,
    /// Badge value: sum of line quantities.
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&CartState::default())
    }

    /// The counter badge is only rendered when something is in the cart.
    #[must_use]
    pub const fn show_badge(&self) -> bool {
        self.item_count > 0
    }
}

impl From<&CartState> for CartView {
    fn from(state: &CartState) -> Self {
        Self {
            items: state.items.iter().map(CartItemView::from).collect(),
            total: state.total.to_string(),
            item_count: state.items.iter().map(|item| item.quantity).sum(),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image: item.image.clone(),
            price: item.price.to_string(),
            price_amount: item.price.amount().normalize().to_string(),
            quantity: item.quantity,
            line_total: (item.price * item.quantity).to_string(),
        }
    }
}
