//! Portal error taxonomy and the single place errors become log lines and toasts.
//!
//! ERROR HANDLING
//! ==============
//! Call sites never pick log levels or toast text themselves. They wrap the
//! failure in [`PortalError`] and hand it to [`report_error`], which consults
//! [`classify`]. No failure is retried; every path is terminal for the
//! invocation that hit it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::config::ConfigError;
use crate::net::geocode::GeocodeError;
use crate::net::session::SessionError;
use crate::net::store::StoreError;
use crate::notify::{Notifier, Severity};
use crate::profile::ProfileError;
use crate::util::geolocation::GeolocationError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortalError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// An aggregation pass could not assemble the profile.
    #[error("profile load failed: {0}")]
    Profile(#[from] ProfileError),

    /// The store failed while looking up the doctor contact.
    #[error("doctor contact lookup failed: {0}")]
    DoctorLookup(StoreError),

    #[error("address lookup failed: {0}")]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Warn,
    Error,
}

/// How one error kind is surfaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorReport {
    pub level: LogLevel,
    /// `None` means log-only.
    pub severity: Option<Severity>,
    /// Text shown to the user, in a toast and/or inline.
    pub message: &'static str,
}

#[must_use]
pub fn classify(err: &PortalError) -> ErrorReport {
    let (level, severity, message) = match err {
        PortalError::Config(_) => (LogLevel::Error, Some(Severity::Error), "Portal is not configured"),
        PortalError::Session(_) => (LogLevel::Error, Some(Severity::Error), "Could not read session"),
        PortalError::Profile(_) => (LogLevel::Error, Some(Severity::Error), "Failed to load profile data"),
        PortalError::DoctorLookup(_) => {
            (LogLevel::Error, Some(Severity::Error), "Could not fetch doctor contact information")
        }
        PortalError::Geocode(_) => (LogLevel::Warn, None, "Error fetching address."),
        PortalError::Geolocation(geo) => match geo {
            GeolocationError::PermissionDenied => (
                LogLevel::Error,
                Some(Severity::Warning),
                "Location access denied. Please enable location services.",
            ),
            GeolocationError::PositionUnavailable => {
                (LogLevel::Error, Some(Severity::Error), "Location information unavailable")
            }
            GeolocationError::Timeout => (LogLevel::Warn, None, "Location request timed out"),
            GeolocationError::Unknown(_) => (LogLevel::Error, None, "An unknown error occurred"),
            GeolocationError::Unsupported => (LogLevel::Error, None, "Geolocation is not supported by this browser"),
        },
    };
    ErrorReport { level, severity, message }
}

/// Log `err` and raise a toast when its classification calls for one.
/// Returns the classification so callers can reuse the message inline.
pub fn report_error<N: Notifier + ?Sized>(err: &PortalError, notifier: &N) -> ErrorReport {
    let report = classify(err);
    match report.level {
        LogLevel::Warn => leptos::logging::warn!("{err}"),
        LogLevel::Error => leptos::logging::error!("{err}"),
    }
    if let Some(severity) = report.severity {
        notifier.notify(report.message, severity);
    }
    report
}
