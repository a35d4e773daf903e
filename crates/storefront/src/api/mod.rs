//! HTTP client for the shop backend JSON API.
//!
//! # Architecture
//!
//! - The backend is the source of truth for cart, catalog, favorites and
//!   orders - NO local sync, direct API calls
//! - Plain JSON over HTTP with `reqwest`; every endpoint returns either a
//!   data payload or a `{"success": bool}` acknowledgement
//! - Cart state is never cached here: the controller re-fetches after every
//!   mutation
//!
//! # Example
//!
//! ```rust,ignore
//! use lavka_storefront::api::ApiClient;
//!
//! let api = ApiClient::new(&config.api_base_url);
//!
//! // Add a product, then fetch the fresh cart
//! let count = api.add_to_cart(&product_id, 1).await?;
//! let cart = api.get_cart().await?;
//! ```

pub mod types;

pub use types::*;

use std::sync::Arc;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use lavka_core::{ItemId, ProductId};

/// Errors that can occur when talking to the backend API.
///
/// The storefront surfaces all of these identically (a transient user
/// message); the split exists for logging and Sentry.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, protocol, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status code.
    #[error("Backend returned {0}")]
    Status(StatusCode),

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend acknowledged the request with `success: false`.
    #[error("Backend rejected {0}")]
    Rejected(&'static str),
}

/// Client for the shop backend JSON API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Create a new backend API client.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base: base_url.as_str().trim_end_matches('/').to_string(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base)
    }

    /// Send a request and parse the JSON response.
    ///
    /// The body is read as text first so parse failures can log a snippet.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Backend API returned non-success status"
            );
            return Err(ApiError::Status(status));
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse backend API response"
                );
                Err(ApiError::Parse(e))
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.inner.client.get(self.url(path))).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.inner.client.post(self.url(path)).json(body))
            .await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.inner.client.post(self.url(path))).await
    }

    // =========================================================================
    // Cart Methods (never cached - mutable state)
    // =========================================================================

    /// Fetch the full cart snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not parse.
    #[instrument(skip(self))]
    pub async fn get_cart(&self) -> Result<CartPayload, ApiError> {
        self.get_json("/api/cart").await
    }

    /// Add a product to the cart. Returns the server-reported item count
    /// when the backend includes one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_to_cart(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Option<u32>, ApiError> {
        let status: StatusResponse = self
            .post_json(
                "/api/cart/add",
                &AddToCartRequest {
                    product_id,
                    quantity,
                },
            )
            .await?;
        Ok(check(status, "cart/add")?.count)
    }

    /// Remove a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(item_id = %item_id))]
    pub async fn remove_from_cart(&self, item_id: &ItemId) -> Result<(), ApiError> {
        let status: StatusResponse = self
            .post_empty(&format!("/api/cart/remove/{item_id}"))
            .await?;
        check(status, "cart/remove").map(drop)
    }

    /// Set the quantity of a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(item_id = %item_id))]
    pub async fn update_quantity(&self, item_id: &ItemId, quantity: u32) -> Result<(), ApiError> {
        let status: StatusResponse = self
            .post_json("/api/cart/update", &UpdateQuantityRequest { item_id, quantity })
            .await?;
        check(status, "cart/update").map(drop)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), ApiError> {
        let status: StatusResponse = self.post_empty("/api/cart/clear").await?;
        check(status, "cart/clear").map(drop)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Create an order from the current cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self))]
    pub async fn create_order(&self) -> Result<(), ApiError> {
        let status: StatusResponse = self.post_empty("/api/orders/create").await?;
        check(status, "orders/create").map(drop)
    }

    // =========================================================================
    // Catalog & Favorites
    // =========================================================================

    /// Search the product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not parse.
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        self.execute(
            self.inner
                .client
                .get(self.url("/api/products"))
                .query(&[("search", query)]),
        )
        .await
    }

    /// Toggle the favorite flag of a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn toggle_favorite(&self, product_id: &ProductId) -> Result<(), ApiError> {
        let status: StatusResponse = self
            .post_json("/api/favorites/toggle", &ToggleFavoriteRequest { product_id })
            .await?;
        check(status, "favorites/toggle").map(drop)
    }
}

/// Turn a `success: false` acknowledgement into an error.
fn check(status: StatusResponse, operation: &'static str) -> Result<StatusResponse, ApiError> {
    if status.success {
        Ok(status)
    } else {
        Err(ApiError::Rejected(operation))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(&Url::parse(&server.uri()).unwrap())
    }

    #[tokio::test]
    async fn test_get_cart_parses_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cart"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"id": "1", "name": "Чай", "image": "/img/tea.png", "price": 100, "quantity": 2}
                ],
                "total": 200
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cart = client(&server).get_cart().await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, lavka_core::Price::from(200));
    }

    #[tokio::test]
    async fn test_add_to_cart_sends_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/cart/add"))
            .and(body_json(json!({"productId": "42", "quantity": 1})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "count": 3})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let count = client(&server)
            .add_to_cart(&ProductId::new("42"), 1)
            .await
            .unwrap();
        assert_eq!(count, Some(3));
    }

    #[tokio::test]
    async fn test_remove_uses_path_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/cart/remove/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .remove_from_cart(&ItemId::new("7"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_rejected_acknowledgement_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/cart/clear"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let err = client(&server).clear_cart().await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected("cart/clear")));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cart"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server).get_cart().await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }

    #[tokio::test]
    async fn test_garbage_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cart"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server).get_cart().await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[tokio::test]
    async fn test_search_sends_query_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .and(query_param("search", "чай"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "42", "name": "Чай зелёный", "image": "/img/tea.png", "price": 150}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let products = client(&server).search_products("чай").await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(
            products.first().unwrap().id,
            ProductId::new("42")
        );
    }
}
