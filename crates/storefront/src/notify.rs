//! Transient user-facing messages.
//!
//! A managed queue: each message carries an expiry instant and a dismiss
//! token. Messages stack - a new message never cancels an earlier one - and
//! expired entries are purged lazily whenever the queue is read, so there are
//! no timer tasks racing with explicit dismissal.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use uuid::Uuid;

/// Severity of a transient message, mapped to a CSS class in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class carried by the rendered message node.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "message-success",
            Self::Error => "message-error",
        }
    }
}

/// Handle for explicitly removing one message before it expires.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct DismissToken(Uuid);

impl std::fmt::Display for DismissToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A queued transient message.
#[derive(Debug, Clone)]
pub struct Notification {
    token: DismissToken,
    text: String,
    kind: MessageKind,
    expires_at: Instant,
}

impl Notification {
    #[must_use]
    pub const fn token(&self) -> DismissToken {
        self.token
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }
}

/// Shared queue of transient messages.
///
/// Cheap to clone; all clones share one queue.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Mutex<Vec<Notification>>>,
    ttl: Duration,
}

impl Notifier {
    /// Create a notifier whose messages live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    /// Queue a success message.
    pub fn success(&self, text: impl Into<String>) -> DismissToken {
        self.push(text, MessageKind::Success)
    }

    /// Queue an error message.
    pub fn error(&self, text: impl Into<String>) -> DismissToken {
        self.push(text, MessageKind::Error)
    }

    /// Queue a message and return its dismiss token.
    pub fn push(&self, text: impl Into<String>, kind: MessageKind) -> DismissToken {
        let token = DismissToken(Uuid::new_v4());
        let notification = Notification {
            token,
            text: text.into(),
            kind,
            expires_at: Instant::now() + self.ttl,
        };
        let mut queue = self.lock();
        purge(&mut queue);
        queue.push(notification);
        token
    }

    /// Unexpired messages in insertion order.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        let mut queue = self.lock();
        purge(&mut queue);
        queue.clone()
    }

    /// Remove one message by token. Returns whether anything was removed.
    pub fn dismiss(&self, token: DismissToken) -> bool {
        let mut queue = self.lock();
        purge(&mut queue);
        let before = queue.len();
        queue.retain(|notification| notification.token != token);
        queue.len() < before
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Drop expired entries.
fn purge(queue: &mut Vec<Notification>) {
    let now = Instant::now();
    queue.retain(|notification| now < notification.expires_at);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_stack() {
        let notifier = Notifier::new(Duration::from_secs(3));
        notifier.success("Товар добавлен в корзину");
        notifier.error("Ошибка поиска");

        let active = notifier.active();
        assert_eq!(active.len(), 2);
        let first = active.first().expect("first message");
        assert_eq!(first.text(), "Товар добавлен в корзину");
        assert_eq!(first.kind(), MessageKind::Success);
    }

    #[test]
    fn test_expired_messages_are_purged() {
        let notifier = Notifier::new(Duration::ZERO);
        notifier.success("мимолётное");
        assert!(notifier.active().is_empty());
    }

    #[test]
    fn test_dismiss_removes_exactly_one() {
        let notifier = Notifier::new(Duration::from_secs(3));
        let first = notifier.success("раз");
        notifier.success("два");

        assert!(notifier.dismiss(first));
        let remaining = notifier.active();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.first().expect("second message").text(), "два");

        // Second dismissal of the same token is a no-op
        assert!(!notifier.dismiss(first));
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(MessageKind::Success.css_class(), "message-success");
        assert_eq!(MessageKind::Error.css_class(), "message-error");
    }
}
