//! Notifications
//!
//! Transient success toasts raised after every successful mutation. The
//! stores treat the notifier as fire-and-forget: it has no failure channel
//! and no return value.

use mockall::automock;

/// Receiver for transient success messages.
#[automock]
pub trait Notifier {
    /// Delivers a success message.
    fn success(&self, message: &str);
}

/// Notifier that emits messages through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(%message, "notification");
    }
}

/// Notifier that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn success(&self, _message: &str) {}
}
