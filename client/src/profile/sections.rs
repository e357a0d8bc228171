//! Section renderers: pure mappings from records to panel view models.
//!
//! Each function produces the complete content of one sidebar panel. The
//! components in `components::profile_sections` only lay these models out, so
//! everything a user reads in the sidebar is decided (and tested) here.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use time::macros::format_description;

use crate::net::types::{EmergencyContact, Lifestyle, MedicalInfo, PersonalInfo, User};

pub const NOT_SPECIFIED: &str = "Not specified";
pub const NO_CONTACTS_MESSAGE: &str = "No emergency contacts available";
const INVALID_DATE: &str = "Invalid Date";

/// One label/value row in a data panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataItem {
    pub label: &'static str,
    pub value: String,
}

impl DataItem {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

/// The three header texts that carry the user's display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileHeaders {
    /// Sidebar title, e.g. `"Ann's Portal"`.
    pub portal_title: String,
    /// Heading above the navigation list.
    pub nav_heading: String,
    /// Name next to the profile icon in the top bar.
    pub user_badge: String,
}

#[must_use]
pub fn profile_headers(display_name: &str) -> ProfileHeaders {
    ProfileHeaders {
        portal_title: format!("{display_name}'s Portal"),
        nav_heading: display_name.to_owned(),
        user_badge: display_name.to_owned(),
    }
}

#[must_use]
pub fn personal_info_items(user: &User, info: &PersonalInfo) -> Vec<DataItem> {
    vec![
        DataItem::new("Full Name", user.name.as_str()),
        DataItem::new("Email", or_not_specified(user.email.as_deref())),
        DataItem::new("Date of Birth", format_date_of_birth(info.dob.as_deref().unwrap_or_default())),
        DataItem::new("Blood Type", or_not_specified(info.blood_type.as_deref())),
        DataItem::new("Height", measurement(info.height_cm, "cm")),
        DataItem::new("Weight", measurement(info.weight_kg, "kg")),
    ]
}

/// Format an ISO date (optionally followed by a time part) as `M/D/YYYY`.
/// The calendar date is used as stored, with no timezone shift.
#[must_use]
pub fn format_date_of_birth(raw: &str) -> String {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    match time::Date::parse(date_part, format_description!("[year]-[month]-[day]")) {
        Ok(date) => format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year()),
        Err(_) => INVALID_DATE.to_owned(),
    }
}

/// Trimmed text, or [`NOT_SPECIFIED`] when absent or blank.
fn or_not_specified(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_SPECIFIED)
        .to_owned()
}

/// `"170 cm"` for a positive value; zero or absent is not specified.
fn measurement(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if v > 0.0 => format!("{v} {unit}"),
        _ => NOT_SPECIFIED.to_owned(),
    }
}

/// Medical history panel: one entry per diagnosed condition plus optional notes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicalPanel {
    pub conditions: Vec<&'static str>,
    pub notes: Option<String>,
}

impl MedicalPanel {
    /// `true` when nothing should be rendered at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.notes.is_none()
    }
}

#[must_use]
pub fn medical_panel(info: &MedicalInfo) -> MedicalPanel {
    let flags = [
        ("Diabetes", info.diabetes),
        ("Hypertension", info.hypertension),
        ("Heart Disease", info.heart_disease),
        ("Asthma", info.asthma),
        ("Allergies", info.allergies),
    ];
    MedicalPanel {
        conditions: flags
            .into_iter()
            .filter_map(|(label, on)| on.then_some(label))
            .collect(),
        notes: info
            .notes
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(str::to_owned),
    }
}

#[must_use]
pub fn lifestyle_items(lifestyle: &Lifestyle) -> Vec<DataItem> {
    vec![
        DataItem::new("Smoking", if lifestyle.smoking { "Yes 🚬" } else { "No 🚭" }),
        DataItem::new("Alcohol", if lifestyle.alcohol { "Yes 🍷" } else { "No" }),
        DataItem::new("Exercise", if lifestyle.exercise { "Yes 🏋️" } else { "No ❌" }),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactCard {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub email: String,
    pub primary: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactsPanel {
    /// Renders [`NO_CONTACTS_MESSAGE`].
    Empty,
    /// One card per contact, in the order the store returned them.
    Cards(Vec<ContactCard>),
}

#[must_use]
pub fn contacts_panel(contacts: &[EmergencyContact]) -> ContactsPanel {
    if contacts.is_empty() {
        return ContactsPanel::Empty;
    }
    ContactsPanel::Cards(
        contacts
            .iter()
            .map(|c| ContactCard {
                name: or_not_specified(c.name.as_deref()),
                relationship: or_not_specified(c.relationship.as_deref()),
                phone: or_not_specified(c.phone.as_deref()),
                email: or_not_specified(c.email.as_deref()),
                primary: c.is_primary,
            })
            .collect(),
    )
}
