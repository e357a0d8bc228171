//! User-facing notification surface.
//!
//! Notifications are fire-and-forget. [`ToastNotifier`] pushes them into the
//! reactive toast list rendered by `components::toast_stack`; tests use a
//! recording double.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// CSS modifier for the toast element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Warning => "toast--warning",
            Self::Error => "toast--error",
        }
    }
}

pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// [`Notifier`] backed by the shared toast signal.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    #[must_use]
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let mut id = None;
        self.toasts.update(|t| id = Some(t.push(message, severity)));

        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = id {
                let toasts = self.toasts;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(crate::state::toast::TOAST_TTL).await;
                    toasts.update(|t| t.dismiss(&id));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
