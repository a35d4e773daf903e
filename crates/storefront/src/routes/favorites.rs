//! Favorites route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use lavka_core::ProductId;

use crate::state::AppState;

const MSG_FAVORITES_UPDATED: &str = "Список избранного обновлен";
const MSG_FAVORITES_FAILED: &str = "Ошибка обновления избранного";

/// Toggle favorite form data. `active` is the button's current visual state.
#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteForm {
    pub product_id: String,
    #[serde(default)]
    pub active: bool,
}

/// Favorite button fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/favorite_button.html")]
pub struct FavoriteButtonTemplate {
    pub product_id: String,
    pub active: bool,
}

/// Toggle a product's favorite flag.
///
/// The button only flips its `active` class after the backend confirms the
/// toggle; on failure it re-renders unchanged and an error message is queued.
#[instrument(skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
    Form(form): Form<ToggleFavoriteForm>,
) -> impl IntoResponse {
    let product_id = ProductId::new(form.product_id);

    let active = match state.api().toggle_favorite(&product_id).await {
        Ok(()) => {
            state.notifier().success(MSG_FAVORITES_UPDATED);
            !form.active
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to toggle favorite");
            state.notifier().error(MSG_FAVORITES_FAILED);
            form.active
        }
    };

    FavoriteButtonTemplate {
        product_id: product_id.to_string(),
        active,
    }
}
