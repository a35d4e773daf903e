//! Search route handlers.
//!
//! Search is delegated to the backend catalog (`GET /api/products`); results
//! replace the product grid as a fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::api::Product;
use crate::filters;
use crate::state::AppState;

const MSG_SEARCH_FAILED: &str = "Ошибка поиска";

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price.to_string(),
        }
    }
}

/// Full search page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/search.html")]
pub struct SearchPageTemplate {
    pub query: String,
    pub products: Vec<ProductView>,
    pub cart_count: u32,
}

/// Product grid fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductView>,
}

/// Full search page.
#[instrument(skip(state))]
pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let query_str = query.q.trim();

    let products = if query_str.is_empty() {
        Vec::new()
    } else {
        fetch(&state, query_str).await
    };

    SearchPageTemplate {
        query: query_str.to_string(),
        products,
        cart_count: state.cart().item_count(),
    }
}

/// Product grid fragment.
///
/// An empty query is a no-op: 204 means nothing gets swapped and no backend
/// request is made. A failed search also swaps nothing - the previous grid
/// stays - and queues an error message.
#[instrument(skip(state))]
pub async fn results(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let query_str = query.q.trim();
    if query_str.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    match state.api().search_products(query_str).await {
        Ok(products) => ProductGridTemplate {
            products: products.iter().map(ProductView::from).collect(),
        }
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Search failed");
            state.notifier().error(MSG_SEARCH_FAILED);
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

/// Fetch for the full page: failures degrade to an empty grid plus a message.
async fn fetch(state: &AppState, query: &str) -> Vec<ProductView> {
    match state.api().search_products(query).await {
        Ok(products) => products.iter().map(ProductView::from).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "Search failed");
            state.notifier().error(MSG_SEARCH_FAILED);
            Vec::new()
        }
    }
}
