use super::*;
use crate::net::geocode::{Address, GeocodeError};
use crate::test_helpers::RecordingNotifier;

struct FixedGeocoder(Result<Address, GeocodeError>);

#[async_trait::async_trait(?Send)]
impl ReverseGeocoder for FixedGeocoder {
    async fn reverse(&self, _latitude: f64, _longitude: f64) -> Result<Address, GeocodeError> {
        self.0.clone()
    }
}

fn fix() -> Fix {
    Fix { latitude: 1.5, longitude: 2.25, accuracy: 30.0 }
}

#[test]
fn from_code_maps_standard_codes() {
    assert_eq!(GeolocationError::from_code(1), GeolocationError::PermissionDenied);
    assert_eq!(GeolocationError::from_code(2), GeolocationError::PositionUnavailable);
    assert_eq!(GeolocationError::from_code(3), GeolocationError::Timeout);
    assert_eq!(GeolocationError::from_code(9), GeolocationError::Unknown(9));
}

#[tokio::test]
async fn resolve_fix_success_shows_address() {
    let geocoder = FixedGeocoder(Ok(Address { road: Some("Main St".to_owned()), ..Address::default() }));
    let notifier = RecordingNotifier::default();
    let state = resolve_fix(&geocoder, &notifier, fix()).await;
    assert_eq!(state, LocationState::Resolved { address: "Main St".to_owned(), fix: fix() });
}

#[tokio::test]
async fn resolve_fix_failure_keeps_coordinates_without_toast() {
    let geocoder = FixedGeocoder(Err(GeocodeError::Status { status: 503 }));
    let notifier = RecordingNotifier::default();
    let state = resolve_fix(&geocoder, &notifier, fix()).await;
    assert_eq!(state, LocationState::failed("Error fetching address.", Some(fix())));
    assert!(notifier.sent.borrow().is_empty());
}

#[test]
fn position_error_replaces_pending_card() {
    let notifier = RecordingNotifier::default();
    let next = position_error_state(&LocationState::Pending, GeolocationError::Timeout, &notifier);
    assert_eq!(next, Some(LocationState::failed("Location request timed out", None)));
}

#[test]
fn position_error_keeps_resolved_fix() {
    let notifier = RecordingNotifier::default();
    let shown = LocationState::Resolved { address: "Main St".to_owned(), fix: fix() };
    assert_eq!(position_error_state(&shown, GeolocationError::Timeout, &notifier), None);

    let coordinates_only = LocationState::failed("Error fetching address.", Some(fix()));
    assert_eq!(position_error_state(&coordinates_only, GeolocationError::PositionUnavailable, &notifier), None);
}
