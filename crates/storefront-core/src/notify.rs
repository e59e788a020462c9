//! Transient user-facing notifications.
//!
//! Sinks are fire-and-forget: nothing they do feeds back into the cart.

use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

/// Shown after a product is added to the cart.
pub const ITEM_ADDED: &str = "Item is added in the cart.";

/// Shown after a product is removed from the cart.
pub const ITEM_REMOVED: &str = "Item is removed from the cart.";

/// How long a notification stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastDuration {
    /// About two seconds.
    #[default]
    Short,
    /// About three and a half seconds.
    Long,
}

impl ToastDuration {
    /// Display time for this duration.
    pub fn as_duration(self) -> Duration {
        match self {
            ToastDuration::Short => Duration::from_millis(2000),
            ToastDuration::Long => Duration::from_millis(3500),
        }
    }
}

impl fmt::Display for ToastDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastDuration::Short => write!(f, "short"),
            ToastDuration::Long => write!(f, "long"),
        }
    }
}

/// Destination for transient messages.
pub trait NotificationSink: Send + Sync {
    /// Surface `message` for roughly `duration`.
    fn notify(&self, message: &str, duration: ToastDuration);
}

/// Sink that writes notifications to the `log` facade.
///
/// Used when nobody is watching a terminal, e.g. scripted shop sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Log line for a notification.
    pub fn format(message: &str, duration: ToastDuration) -> String {
        format!("[toast {}ms] {message}", duration.as_duration().as_millis())
    }
}

impl NotificationSink for LogNotifier {
    fn notify(&self, message: &str, duration: ToastDuration) {
        log::info!("{}", Self::format(message, duration));
    }
}

/// Sink that keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(String, ToastDuration)>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far, oldest first.
    pub fn messages(&self) -> Vec<(String, ToastDuration)> {
        match self.messages.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, message: &str, duration: ToastDuration) {
        let mut guard = match self.messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push((message.to_string(), duration));
    }
}
