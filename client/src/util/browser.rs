//! Blocking alerts and full-page navigation.
//!
//! Both leave the single-page app (an alert blocks it, navigation replaces
//! it), so they go straight to `window` rather than through the router.
//! Requires a browser environment; SSR and native test paths log and no-op.

/// Show a blocking `window.alert` with `message`.
pub fn show_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                leptos::logging::warn!("alert failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Navigate the whole page to `href`. Used for the sign-up redirect and the
/// `tel:` handoff.
pub fn assign_location(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                leptos::logging::error!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("navigate: {href}");
    }
}
