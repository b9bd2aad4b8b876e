//! User-facing notifications.
//!
//! The notification channel is an explicitly injected capability: anything
//! that wants to raise a toast holds a [`Notifier`], and the application
//! owns the [`NotificationCenter`] that collects, expires and renders
//! them. Nothing in the dashboard reaches for ambient global state.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

/// Severity of a notification, reflected in how its toast is styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Something went wrong.
    Error,
    /// Informational.
    Info,
}

/// One user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// Human-readable description.
    pub description: String,
    /// Display severity.
    pub severity: Severity,
    /// How long the toast stays up before auto-dismissing.
    pub duration: Duration,
    /// Whether the user may dismiss the toast early.
    pub dismissible: bool,
}

/// How long error toasts stay up.
const ERROR_TOAST_DURATION: Duration = Duration::from_secs(5);

/// A cheap handle for raising notifications.
#[derive(Clone)]
pub struct Notifier {
    tx: Sender<Notification>,
}

impl Notifier {
    /// Raises an arbitrary notification.
    pub fn push(&self, notification: Notification) {
        // The receiver only goes away on app teardown.
        let _ = self.tx.send(notification);
    }

    /// Raises a dismissible, auto-expiring error toast.
    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Notification {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
            duration: ERROR_TOAST_DURATION,
            dismissible: true,
        });
    }
}

/// A notification with its display deadline stamped.
#[derive(Clone, Debug)]
pub struct ActiveNotification {
    /// The notification itself.
    pub notification: Notification,
    /// When the toast auto-dismisses.
    pub deadline: Instant,
}

/// Owns the set of currently displayed notifications.
pub struct NotificationCenter {
    rx: Receiver<Notification>,
    active: Vec<ActiveNotification>,
}

impl NotificationCenter {
    /// Creates a center and the [`Notifier`] handle feeding it.
    pub fn new() -> (Self, Notifier) {
        let (tx, rx) = channel();
        (
            Self {
                rx,
                active: Vec::new(),
            },
            Notifier { tx },
        )
    }

    /// Pulls newly raised notifications in and drops expired ones. Called
    /// once per render pass.
    pub fn sync(&mut self) {
        let now = Instant::now();

        while let Ok(notification) = self.rx.try_recv() {
            self.active.push(ActiveNotification {
                deadline: now + notification.duration,
                notification,
            });
        }

        self.active.retain(|active| active.deadline > now);
    }

    /// Dismisses the newest dismissible notification, if any.
    pub fn dismiss(&mut self) {
        if let Some(index) = self
            .active
            .iter()
            .rposition(|active| active.notification.dismissible)
        {
            self.active.remove(index);
        }
    }

    /// The notifications currently on screen, oldest first.
    pub fn active(&self) -> &[ActiveNotification] {
        &self.active
    }
}
