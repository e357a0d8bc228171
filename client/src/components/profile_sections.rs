//! Layout for the four sidebar data panels.
//!
//! Content decisions (labels, placeholders, which conditions show) are made
//! by `profile::sections`; these components only place the view models.

use leptos::prelude::*;

use crate::profile::sections::{ContactCard, ContactsPanel, DataItem, MedicalPanel, NO_CONTACTS_MESSAGE};
use crate::state::profile::ProfileState;
use crate::state::sidebar::Section;

#[component]
fn DataItems(items: Vec<DataItem>) -> impl IntoView {
    items
        .into_iter()
        .map(|item| {
            view! {
                <div class="data-item">
                    <span class="data-label">{item.label}</span>
                    <span class="data-value">{item.value}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn MedicalHistory(panel: MedicalPanel) -> impl IntoView {
    let conditions = panel
        .conditions
        .into_iter()
        .map(|name| {
            view! {
                <div class="medical-condition active">
                    <span class="condition-name">{format!("Diagnosed with : {name}")}</span>
                    <span class="condition-status"></span>
                </div>
            }
        })
        .collect_view();
    let notes = panel.notes.map(|notes| {
        view! {
            <div class="notes-section">
                <h4>"Additional Notes"</h4>
                <p>{notes}</p>
            </div>
        }
    });

    view! {
        {conditions}
        {notes}
    }
}

#[component]
fn ContactItem(card: ContactCard) -> impl IntoView {
    let primary = card.primary.then(|| view! { <div class="primary-contact">"⭐ Primary Contact"</div> });
    view! {
        <div class="contact-item">
            <div class="contact-name">
                <strong>{card.name}</strong>
                {format!(" ({})", card.relationship)}
            </div>
            <div class="contact-phone">{format!("📞 {}", card.phone)}</div>
            <div class="contact-email">{format!("✉️ {}", card.email)}</div>
            {primary}
        </div>
    }
}

#[component]
fn Contacts(panel: ContactsPanel) -> impl IntoView {
    match panel {
        ContactsPanel::Empty => view! { <div class="no-contacts">{NO_CONTACTS_MESSAGE}</div> }.into_any(),
        ContactsPanel::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <ContactItem card/> })
            .collect_view()
            .into_any(),
    }
}

/// Body of one sidebar section, re-rendered whenever a pass commits.
#[component]
pub fn SectionContent(section: Section) -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileState>>();

    move || {
        let state = profile.get();
        match section {
            Section::PersonalInfo => state
                .personal_info
                .map(|items| view! { <DataItems items/> }.into_any()),
            Section::MedicalHistory => state
                .medical
                .map(|panel| view! { <MedicalHistory panel/> }.into_any()),
            Section::Lifestyle => state
                .lifestyle
                .map(|items| view! { <DataItems items/> }.into_any()),
            Section::EmergencyContacts => state
                .contacts
                .map(|panel| view! { <Contacts panel/> }.into_any()),
        }
    }
}
