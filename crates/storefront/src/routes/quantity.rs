//! Quantity stepper fragment.
//!
//! Display-only arithmetic: adjusts the input value and the derived line
//! total (unit price x quantity). Never calls the backend API - the change
//! reaches the cart only when the input itself posts `/cart/update`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::IntoResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use lavka_core::{Price, Quantity};

use crate::error::AppError;

/// Stepper form data.
#[derive(Debug, Deserialize)]
pub struct StepperForm {
    pub item_id: String,
    /// Raw unit price amount from the line's `data-price` attribute.
    pub price: Decimal,
    pub quantity: u32,
    pub op: StepOp,
}

/// Stepper direction.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepOp {
    Inc,
    Dec,
}

/// Quantity control fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/quantity_control.html")]
pub struct QuantityControlTemplate {
    pub item_id: String,
    pub quantity: u32,
    pub price_amount: String,
    pub line_total: String,
}

/// Step a line quantity up or down.
///
/// Decrement saturates at 1; increment is unbounded.
#[instrument]
pub async fn stepper(Form(form): Form<StepperForm>) -> Result<impl IntoResponse, AppError> {
    if form.price.is_sign_negative() {
        return Err(AppError::BadRequest("negative price".to_string()));
    }

    let quantity = Quantity::new(form.quantity).unwrap_or(Quantity::MIN);
    let quantity = match form.op {
        StepOp::Inc => quantity.increment(),
        StepOp::Dec => quantity.decrement(),
    };

    let price = Price::new(form.price);
    let line_total = price * quantity.get();

    Ok(QuantityControlTemplate {
        item_id: form.item_id,
        quantity: quantity.get(),
        price_amount: form.price.normalize().to_string(),
        line_total: line_total.to_string(),
    })
}
