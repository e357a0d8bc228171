use super::*;

fn fix() -> Fix {
    Fix { latitude: 39.781_721_3, longitude: -89.650_148_1, accuracy: 12.6 }
}

#[test]
fn location_state_default_is_pending() {
    assert_eq!(LocationState::default(), LocationState::Pending);
}

#[test]
fn coordinates_text_uses_six_decimals() {
    assert_eq!(fix().coordinates_text(), "Coordinates: 39.781721, -89.650148");
}

#[test]
fn accuracy_text_rounds_to_whole_meters() {
    assert_eq!(fix().accuracy_text(), "Accuracy: 13 meters");
}

#[test]
fn resolved_joins_address_line() {
    let address = Address {
        road: Some("Main St".to_owned()),
        city: Some("Springfield".to_owned()),
        postcode: Some("12345".to_owned()),
        ..Address::default()
    };
    let LocationState::Resolved { address, fix: f } = LocationState::resolved(fix(), &address) else {
        panic!("expected resolved");
    };
    assert_eq!(address, "Main St, Springfield, 12345");
    assert_eq!(f, fix());
}

#[test]
fn failed_keeps_fix_for_fallback() {
    let state = LocationState::failed("Error fetching address.", Some(fix()));
    assert_eq!(state, LocationState::Failed { message: "Error fetching address.".to_owned(), fix: Some(fix()) });
}

#[test]
fn has_fix_only_when_coordinates_are_shown() {
    assert!(!LocationState::Pending.has_fix());
    assert!(!LocationState::failed("Location access denied", None).has_fix());
    assert!(LocationState::failed("Address lookup failed", Some(fix())).has_fix());
    assert!(LocationState::Resolved { address: "Springfield".to_owned(), fix: fix() }.has_fix());
}
