//! User-visible notifications.
//!
//! The pagination controller reports fetch failures through the
//! [`Notifier`] sink; the TUI renders whatever [`ToastQueue`] currently
//! holds as a short-lived overlay.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Fire-and-forget sink for short user-facing messages.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, message: &str);
}

struct Toast {
    message: String,
    expires_at: Instant,
}

/// Latest-wins toast holder: a new message replaces whatever is showing.
#[derive(Clone)]
pub struct ToastQueue {
    current: Arc<Mutex<Option<Toast>>>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            ttl: TOAST_TTL,
        }
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            ttl,
        }
    }

    /// The message to show right now, if any. Expired toasts are dropped
    /// on access.
    pub fn active(&self) -> Option<String> {
        let mut current = self.current.lock();
        match &*current {
            Some(toast) if toast.expires_at > Instant::now() => Some(toast.message.clone()),
            Some(_) => {
                *current = None;
                None
            }
            None => None,
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str) {
        tracing::debug!(%message, "toast");
        *self.current.lock() = Some(Toast {
            message: message.to_string(),
            expires_at: Instant::now() + self.ttl,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_message_wins() {
        let toasts = ToastQueue::new();
        toasts.notify("first");
        toasts.notify("second");
        assert_eq!(toasts.active().as_deref(), Some("second"));
    }

    #[test]
    fn test_expired_toast_disappears() {
        let toasts = ToastQueue::with_ttl(Duration::ZERO);
        toasts.notify("gone already");
        assert_eq!(toasts.active(), None);
    }

    #[test]
    fn test_clones_share_the_queue() {
        let toasts = ToastQueue::new();
        let handle = toasts.clone();
        handle.notify("shared");
        assert_eq!(toasts.active().as_deref(), Some("shared"));
    }
}
