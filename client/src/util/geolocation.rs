//! Device geolocation and address tracking for the location card.
//!
//! SYSTEM CONTEXT
//! ==============
//! A one-shot high-accuracy request and a standing watch both feed
//! [`resolve_fix`]. Every report takes a request-generation ticket, so when
//! reports arrive faster than the geocoder answers, only the newest one may
//! update the card. A failed one-shot request takes a ticket too, but never
//! replaces coordinates already on screen. Requires a browser environment; natively the tracker is a
//! no-op.

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use crate::error::{PortalError, report_error};
use crate::net::geocode::ReverseGeocoder;
use crate::notify::Notifier;
use crate::state::location::{Fix, LocationState};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("user denied geolocation permission")]
    PermissionDenied,

    #[error("location information unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("unknown geolocation error (code {0})")]
    Unknown(u16),

    #[error("geolocation is not supported by this browser")]
    Unsupported,
}

impl GeolocationError {
    /// Map a `GeolocationPositionError.code` value.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            other => Self::Unknown(other),
        }
    }
}

/// Turn a position report into the next card state. Address lookup failures
/// are reported and fall back to showing the coordinates.
pub async fn resolve_fix<G, N>(geocoder: &G, notifier: &N, fix: Fix) -> LocationState
where
    G: ReverseGeocoder + ?Sized,
    N: Notifier + ?Sized,
{
    match geocoder.reverse(fix.latitude, fix.longitude).await {
        Ok(address) => LocationState::resolved(fix, &address),
        Err(e) => {
            let report = report_error(&PortalError::from(e), notifier);
            LocationState::failed(report.message, Some(fix))
        }
    }
}

/// Card state after the one-shot request fails, or `None` when a fix is
/// already on screen and must stay. The failure is reported either way.
pub fn position_error_state<N>(current: &LocationState, err: GeolocationError, notifier: &N) -> Option<LocationState>
where
    N: Notifier + ?Sized,
{
    let report = report_error(&PortalError::from(err), notifier);
    (!current.has_fix()).then(|| LocationState::failed(report.message, None))
}

/// Start the one-shot request and the standing watch. Returns the watch id
/// to pass to [`stop_tracking`], or `None` when geolocation is unavailable.
#[cfg(feature = "hydrate")]
pub fn start_tracking(
    config: &crate::config::PortalConfig,
    location: leptos::prelude::RwSignal<LocationState>,
    notifier: crate::notify::ToastNotifier,
) -> Option<i32> {
    use std::rc::Rc;

    use leptos::prelude::{Set, WithUntracked};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::net::geocode::NominatimClient;
    use crate::util::generation::RequestGeneration;

    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
        let report = report_error(&PortalError::from(GeolocationError::Unsupported), &notifier);
        location.set(LocationState::failed(report.message, None));
        return None;
    };

    let generation = RequestGeneration::new();
    let error_generation = generation.clone();
    let geocoder = Rc::new(NominatimClient::new(config));
    let on_fix = move |position: web_sys::GeolocationPosition| {
        let coords = position.coords();
        let fix = Fix { latitude: coords.latitude(), longitude: coords.longitude(), accuracy: coords.accuracy() };
        leptos::logging::log!("location: {}, {}", fix.latitude, fix.longitude);

        let ticket = generation.begin();
        let generation = generation.clone();
        let geocoder = geocoder.clone();
        leptos::task::spawn_local(async move {
            let next = resolve_fix(geocoder.as_ref(), &notifier, fix).await;
            if generation.is_current(ticket) {
                location.set(next);
            }
        });
    };

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(config.geolocation_timeout_ms);
    options.set_maximum_age(0);

    let once_ok = Closure::<dyn FnMut(web_sys::GeolocationPosition)>::new(on_fix.clone());
    let once_err = Closure::<dyn FnMut(web_sys::GeolocationPositionError)>::new(
        move |err: web_sys::GeolocationPositionError| {
            let err = GeolocationError::from_code(err.code());
            let next = location.with_untracked(|current| position_error_state(current, err, &notifier));
            if let Some(next) = next {
                // Drops any address lookup still in flight so it cannot
                // overwrite the error afterwards.
                error_generation.begin();
                location.set(next);
            }
        },
    );
    if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
        once_ok.as_ref().unchecked_ref(),
        Some(once_err.as_ref().unchecked_ref()),
        &options,
    ) {
        leptos::logging::error!("getCurrentPosition failed: {e:?}");
    }
    once_ok.forget();
    once_err.forget();

    let watch_ok = Closure::<dyn FnMut(web_sys::GeolocationPosition)>::new(on_fix);
    let watch_err = Closure::<dyn FnMut(web_sys::GeolocationPositionError)>::new(
        |err: web_sys::GeolocationPositionError| {
            leptos::logging::warn!("error watching position: {}", GeolocationError::from_code(err.code()));
        },
    );
    let watch_id = geolocation
        .watch_position_with_error_callback(watch_ok.as_ref().unchecked_ref(), Some(watch_err.as_ref().unchecked_ref()))
        .ok();
    watch_ok.forget();
    watch_err.forget();
    watch_id
}

/// Cancel a watch started by [`start_tracking`].
#[cfg(feature = "hydrate")]
pub fn stop_tracking(watch_id: i32) {
    if let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) {
        geolocation.clear_watch(watch_id);
    }
}
