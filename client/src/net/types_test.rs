use super::*;

#[test]
fn medical_info_null_flags_decode_as_false() {
    let info: MedicalInfo = serde_json::from_value(serde_json::json!({
        "diabetes": null,
        "hypertension": true,
        "notes": null
    }))
    .unwrap();
    assert!(!info.diabetes);
    assert!(info.hypertension);
    assert!(!info.asthma);
    assert!(info.notes.is_none());
}

#[test]
fn personal_info_optional_measurements_default_to_none() {
    let info: PersonalInfo = serde_json::from_value(serde_json::json!({
        "user_id": "u1",
        "dob": "1990-05-14"
    }))
    .unwrap();
    assert_eq!(info.dob.as_deref(), Some("1990-05-14"));
    assert!(info.blood_type.is_none());
    assert!(info.height_cm.is_none());
    assert!(info.weight_kg.is_none());
}

#[test]
fn emergency_contact_ignores_extra_columns() {
    let contact: EmergencyContact = serde_json::from_value(serde_json::json!({
        "id": 7,
        "user_id": "u1",
        "name": "Dr. Lee",
        "relationship": "Doctor",
        "phone": "555-0100",
        "email": "lee@example.test",
        "is_primary": true
    }))
    .unwrap();
    assert_eq!(contact.relationship.as_deref(), Some("Doctor"));
    assert!(contact.is_primary);
}

#[test]
fn user_requires_name() {
    let result = serde_json::from_value::<User>(serde_json::json!({ "id": "u1", "email": "a@b.c" }));
    assert!(result.is_err());
}

#[test]
fn null_text_columns_decode_as_none() {
    let info: PersonalInfo = serde_json::from_value(serde_json::json!({ "dob": null })).unwrap();
    assert!(info.dob.is_none());

    let contact: EmergencyContact = serde_json::from_value(serde_json::json!({
        "name": "Bo",
        "relationship": null,
        "phone": null
    }))
    .unwrap();
    assert_eq!(contact.name.as_deref(), Some("Bo"));
    assert!(contact.relationship.is_none());
    assert!(contact.phone.is_none());

    let user: User = serde_json::from_value(serde_json::json!({ "id": "u1", "name": "Ann", "email": null })).unwrap();
    assert!(user.email.is_none());
}
