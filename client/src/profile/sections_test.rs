use super::*;

fn user() -> User {
    User { id: "u1".to_owned(), name: "Ann".to_owned(), email: Some("ann@example.test".to_owned()) }
}

fn personal() -> PersonalInfo {
    PersonalInfo { dob: Some("1990-05-14".to_owned()), blood_type: Some("O+".to_owned()), height_cm: Some(170.0), weight_kg: Some(62.5) }
}

fn value_of<'a>(items: &'a [DataItem], label: &str) -> &'a str {
    items
        .iter()
        .find(|i| i.label == label)
        .map(|i| i.value.as_str())
        .unwrap()
}

// =============================================================
// Headers
// =============================================================

#[test]
fn profile_headers_use_display_name_everywhere() {
    let headers = profile_headers("Ann");
    assert_eq!(headers.portal_title, "Ann's Portal");
    assert_eq!(headers.nav_heading, "Ann");
    assert_eq!(headers.user_badge, "Ann");
}

// =============================================================
// Personal info
// =============================================================

#[test]
fn personal_info_lists_six_rows_in_order() {
    let items = personal_info_items(&user(), &personal());
    let labels: Vec<_> = items.iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Full Name", "Email", "Date of Birth", "Blood Type", "Height", "Weight"]);
    assert_eq!(value_of(&items, "Full Name"), "Ann");
    assert_eq!(value_of(&items, "Email"), "ann@example.test");
}

#[test]
fn personal_info_formats_measurements_with_units() {
    let items = personal_info_items(&user(), &personal());
    assert_eq!(value_of(&items, "Height"), "170 cm");
    assert_eq!(value_of(&items, "Weight"), "62.5 kg");
}

#[test]
fn personal_info_missing_values_are_not_specified() {
    let info = PersonalInfo { dob: Some("1990-05-14".to_owned()), blood_type: None, height_cm: None, weight_kg: Some(0.0) };
    let items = personal_info_items(&user(), &info);
    assert_eq!(value_of(&items, "Blood Type"), "Not specified");
    assert_eq!(value_of(&items, "Height"), "Not specified");
    assert_eq!(value_of(&items, "Weight"), "Not specified");
}

#[test]
fn personal_info_blank_blood_type_is_not_specified() {
    let info = PersonalInfo { blood_type: Some("  ".to_owned()), ..personal() };
    let items = personal_info_items(&user(), &info);
    assert_eq!(value_of(&items, "Blood Type"), "Not specified");
}

#[test]
fn personal_info_absent_dob_and_email() {
    let info = PersonalInfo { dob: None, ..personal() };
    let user = User { email: None, ..user() };
    let items = personal_info_items(&user, &info);
    assert_eq!(value_of(&items, "Date of Birth"), "Invalid Date");
    assert_eq!(value_of(&items, "Email"), "Not specified");
}

#[test]
fn format_date_of_birth_is_month_day_year() {
    assert_eq!(format_date_of_birth("1990-05-14"), "5/14/1990");
    assert_eq!(format_date_of_birth("2001-12-03T00:00:00+00:00"), "12/3/2001");
}

#[test]
fn format_date_of_birth_rejects_garbage() {
    assert_eq!(format_date_of_birth("yesterday"), "Invalid Date");
    assert_eq!(format_date_of_birth(""), "Invalid Date");
}

// =============================================================
// Medical info
// =============================================================

#[test]
fn medical_panel_empty_when_no_conditions_or_notes() {
    let panel = medical_panel(&MedicalInfo { notes: Some(String::new()), ..MedicalInfo::default() });
    assert!(panel.is_empty());
    assert!(panel.conditions.is_empty());
}

#[test]
fn medical_panel_keeps_whitespace_only_notes() {
    let panel = medical_panel(&MedicalInfo { notes: Some("  ".to_owned()), ..MedicalInfo::default() });
    assert_eq!(panel.notes.as_deref(), Some("  "));
    assert!(!panel.is_empty());
}

#[test]
fn medical_panel_single_condition_with_notes() {
    let info = MedicalInfo { diabetes: true, notes: Some("watch sugar".to_owned()), ..MedicalInfo::default() };
    let panel = medical_panel(&info);
    assert_eq!(panel.conditions, vec!["Diabetes"]);
    assert_eq!(panel.notes.as_deref(), Some("watch sugar"));
}

#[test]
fn medical_panel_keeps_fixed_label_order() {
    let info = MedicalInfo {
        diabetes: true,
        hypertension: true,
        heart_disease: true,
        asthma: true,
        allergies: true,
        notes: None,
    };
    assert_eq!(
        medical_panel(&info).conditions,
        vec!["Diabetes", "Hypertension", "Heart Disease", "Asthma", "Allergies"]
    );
}

// =============================================================
// Lifestyle
// =============================================================

#[test]
fn lifestyle_always_has_three_rows() {
    let items = lifestyle_items(&Lifestyle::default());
    assert_eq!(items.len(), 3);
    assert_eq!(value_of(&items, "Smoking"), "No 🚭");
    assert_eq!(value_of(&items, "Alcohol"), "No");
    assert_eq!(value_of(&items, "Exercise"), "No ❌");
}

#[test]
fn lifestyle_yes_rows_carry_markers() {
    let items = lifestyle_items(&Lifestyle { smoking: true, alcohol: true, exercise: true });
    assert_eq!(value_of(&items, "Smoking"), "Yes 🚬");
    assert_eq!(value_of(&items, "Alcohol"), "Yes 🍷");
    assert_eq!(value_of(&items, "Exercise"), "Yes 🏋️");
}

// =============================================================
// Emergency contacts
// =============================================================

fn contact(name: &str, primary: bool) -> EmergencyContact {
    EmergencyContact {
        name: Some(name.to_owned()),
        relationship: Some("Spouse".to_owned()),
        phone: Some("555-0101".to_owned()),
        email: Some(format!("{}@example.test", name.to_lowercase())),
        is_primary: primary,
    }
}

#[test]
fn contacts_panel_empty_renders_placeholder() {
    assert_eq!(contacts_panel(&[]), ContactsPanel::Empty);
    assert_eq!(NO_CONTACTS_MESSAGE, "No emergency contacts available");
}

#[test]
fn contacts_panel_marks_primary_only_when_flagged() {
    let ContactsPanel::Cards(cards) = contacts_panel(&[contact("Bo", true), contact("Cy", false)]) else {
        panic!("expected cards");
    };
    assert!(cards[0].primary);
    assert!(!cards[1].primary);
}

#[test]
fn contacts_panel_preserves_given_order() {
    let ContactsPanel::Cards(cards) = contacts_panel(&[contact("Zed", false), contact("Amy", false)]) else {
        panic!("expected cards");
    };
    let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zed", "Amy"]);
}

#[test]
fn contacts_panel_missing_email_is_not_specified() {
    let mut c = contact("Bo", false);
    c.email = None;
    let ContactsPanel::Cards(cards) = contacts_panel(&[c]) else {
        panic!("expected cards");
    };
    assert_eq!(cards[0].email, "Not specified");
}

#[test]
fn contacts_panel_null_text_fields_are_not_specified() {
    let mut c = contact("Bo", false);
    c.relationship = None;
    c.phone = Some("   ".to_owned());
    let ContactsPanel::Cards(cards) = contacts_panel(&[c]) else {
        panic!("expected cards");
    };
    assert_eq!(cards[0].name, "Bo");
    assert_eq!(cards[0].relationship, "Not specified");
    assert_eq!(cards[0].phone, "Not specified");
}
