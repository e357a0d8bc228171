#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use crate::notify::Severity;

/// How long a toast stays on screen before it is dismissed automatically.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub severity: Severity,
}

/// Notifications currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: &str, severity: Severity) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Toast { id: id.clone(), message: message.to_owned(), severity });
        id
    }

    /// Remove the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}
