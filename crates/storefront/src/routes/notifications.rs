//! Transient message route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::notify::DismissToken;
use crate::state::AppState;

/// One rendered message.
#[derive(Debug, Clone)]
pub struct MessageView {
    pub token: String,
    pub text: String,
    pub css_class: &'static str,
}

/// Active messages fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/messages.html")]
pub struct MessagesTemplate {
    pub messages: Vec<MessageView>,
}

/// Dismiss form data.
#[derive(Debug, Deserialize)]
pub struct DismissForm {
    pub token: DismissToken,
}

/// Render the active transient messages.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> MessagesTemplate {
    let messages = state
        .notifier()
        .active()
        .iter()
        .map(|notification| MessageView {
            token: notification.token().to_string(),
            text: notification.text().to_string(),
            css_class: notification.kind().css_class(),
        })
        .collect();

    MessagesTemplate { messages }
}

/// Dismiss one message by token.
#[instrument(skip(state))]
pub async fn dismiss(
    State(state): State<AppState>,
    Form(form): Form<DismissForm>,
) -> Result<StatusCode, AppError> {
    if state.notifier().dismiss(form.token) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("notification {}", form.token)))
    }
}
