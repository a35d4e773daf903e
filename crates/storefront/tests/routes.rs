//! Router-level tests with a stubbed backend.

#![allow(clippy::unwrap_used)]

use std::net::IpAddr;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lavka_storefront::config::StorefrontConfig;
use lavka_storefront::routes;
use lavka_storefront::state::AppState;

fn test_state(server: &MockServer) -> AppState {
    let api_base_url = Url::parse(&server.uri()).unwrap();
    AppState::new(StorefrontConfig {
        checkout_url: api_base_url.join("/checkout").unwrap(),
        api_base_url,
        host: "127.0.0.1".parse::<IpAddr>().unwrap(),
        port: 3000,
        message_ttl: Duration::from_secs(3),
        sentry_dsn: None,
    })
}

fn app(state: &AppState) -> Router {
    routes::routes().with_state(state.clone())
}

fn form_post(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn cart_page_renders_server_total_and_badge() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "1", "name": "Чай", "image": "/img/tea.png", "price": 100, "quantity": 2}
            ],
            "total": 200
        })))
        .mount(&server)
        .await;

    let state = test_state(&server);
    let response = app(&state)
        .oneshot(Request::builder().uri("/cart").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("200 ₽"), "total text missing: {body}");
    assert!(body.contains("cart-counter"), "badge missing: {body}");
    assert!(body.contains(">2</span>"), "badge count missing: {body}");
    assert!(body.contains("Чай"), "item name missing: {body}");
}

#[tokio::test]
async fn search_results_with_empty_query_is_a_no_op() {
    let server = MockServer::start().await;
    let state = test_state(&server);

    let response = app(&state)
        .oneshot(
            Request::builder()
                .uri("/search/results?q=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn search_results_replace_the_grid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "42", "name": "Чай зелёный", "image": "/img/tea.png", "price": 150}
        ])))
        .mount(&server)
        .await;

    let state = test_state(&server);
    let response = app(&state)
        .oneshot(
            Request::builder()
                .uri("/search/results?q=tea")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Чай зелёный"));
    assert!(body.contains("add-to-cart"));
    assert!(body.contains("150 ₽"));
}

#[tokio::test]
async fn quantity_stepper_floors_decrement_at_one() {
    let server = MockServer::start().await;
    let state = test_state(&server);

    let response = app(&state)
        .oneshot(form_post(
            "/cart/quantity",
            "item_id=1&price=100&quantity=1&op=dec",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("value=\"1\""), "quantity changed: {body}");
    assert!(body.contains("100 ₽"), "line total changed: {body}");
    // Display-only: the backend is never involved
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn quantity_stepper_increments_and_recomputes_line_total() {
    let server = MockServer::start().await;
    let state = test_state(&server);

    let response = app(&state)
        .oneshot(form_post(
            "/cart/quantity",
            "item_id=1&price=100&quantity=2&op=inc",
        ))
        .await
        .unwrap();

    let body = body_text(response).await;
    assert!(body.contains("value=\"3\""));
    assert!(body.contains("300 ₽"));
}

#[tokio::test]
async fn add_to_cart_returns_badge_and_trigger() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "count": 3})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "1", "name": "Чай", "image": "/img/tea.png", "price": 100, "quantity": 3}
            ],
            "total": 300
        })))
        .mount(&server)
        .await;

    let state = test_state(&server);
    let response = app(&state)
        .oneshot(form_post("/cart/add", "product_id=42"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("HX-Trigger")
            .and_then(|value| value.to_str().ok()),
        Some("cart-updated")
    );
    let body = body_text(response).await;
    assert!(body.contains(">3</span>"), "server count missing: {body}");
}

#[tokio::test]
async fn favorites_toggle_flips_class_on_confirmed_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/favorites/toggle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let state = test_state(&server);
    let response = app(&state)
        .oneshot(form_post("/favorites/toggle", "product_id=42&active=false"))
        .await
        .unwrap();

    let body = body_text(response).await;
    assert!(body.contains("favorite-button active"), "not flipped: {body}");
}

#[tokio::test]
async fn favorites_toggle_keeps_class_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/favorites/toggle"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let state = test_state(&server);
    let response = app(&state)
        .oneshot(form_post("/favorites/toggle", "product_id=42&active=false"))
        .await
        .unwrap();

    let body = body_text(response).await;
    assert!(!body.contains("favorite-button active"), "flipped: {body}");

    let messages = state.notifier().active();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages.first().unwrap().text(),
        "Ошибка обновления избранного"
    );
}

#[tokio::test]
async fn checkout_with_empty_cart_redirects_back_without_a_request() {
    let server = MockServer::start().await;
    let state = test_state(&server);

    let response = app(&state)
        .oneshot(
            Request::builder()
                .uri("/checkout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/cart")
    );
    assert!(server.received_requests().await.unwrap().is_empty());

    let messages = state.notifier().active();
    assert_eq!(messages.first().unwrap().text(), "Корзина пуста");
}

#[tokio::test]
async fn notifications_render_and_dismiss() {
    let server = MockServer::start().await;
    let state = test_state(&server);

    state.notifier().success("Товар добавлен в корзину");

    let response = app(&state)
        .oneshot(
            Request::builder()
                .uri("/notifications")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Товар добавлен в корзину"));
    assert!(body.contains("message-success"));

    let token = state
        .notifier()
        .active()
        .first()
        .unwrap()
        .token()
        .to_string();
    let dismiss_body: String = format!("token={token}");
    let response = app(&state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/notifications/dismiss")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(dismiss_body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(state.notifier().active().is_empty());

    // Dismissing an unknown token is a 404
    let response = app(&state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/notifications/dismiss")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!("token={token}")))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
