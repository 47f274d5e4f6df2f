//! Advisory notifications emitted during a query
//!
//! Informational only, not part of the data contract; the presentation layer
//! shows them as toasts.

/// Severity of an advisory notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A single advisory message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// Ordered collector for the notifications a query emits.
#[derive(Debug, Default)]
pub struct Notifications(Vec<Notification>);

impl Notifications {
    pub fn info(&mut self, title: &str, message: impl Into<String>) {
        self.push(NotificationLevel::Info, title, message);
    }

    pub fn warning(&mut self, title: &str, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, title, message);
    }

    pub fn error(&mut self, title: &str, message: impl Into<String>) {
        self.push(NotificationLevel::Error, title, message);
    }

    fn push(&mut self, level: NotificationLevel, title: &str, message: impl Into<String>) {
        self.0.push(Notification {
            level,
            title: title.to_string(),
            message: message.into(),
        });
    }

    pub fn into_vec(self) -> Vec<Notification> {
        self.0
    }
}
