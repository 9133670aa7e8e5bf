//! User-visible notifications.

/// Fire-and-forget channel for user-visible messages, the equivalent of
/// Obsidian's `Notice` popups. Must never fail or block the walk.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that surfaces messages through the tracing pipeline.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{message}");
    }
}
