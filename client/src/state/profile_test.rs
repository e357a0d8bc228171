use super::*;
use crate::net::types::{Lifestyle, MedicalInfo};
use crate::profile::sections::{lifestyle_items, medical_panel, profile_headers};

#[test]
fn default_profile_is_not_loaded() {
    assert!(!ProfileState::default().is_loaded());
}

#[test]
fn sink_calls_replace_each_panel() {
    let mut state = ProfileState::default();
    state.update_headers(profile_headers("Ann"));
    state.render_lifestyle(lifestyle_items(&Lifestyle { smoking: true, ..Lifestyle::default() }));
    state.render_lifestyle(lifestyle_items(&Lifestyle::default()));
    state.render_medical_info(medical_panel(&MedicalInfo::default()));
    state.render_emergency_contacts(ContactsPanel::Empty);

    assert!(state.is_loaded());
    assert_eq!(state.lifestyle.as_ref().map(|items| items[0].value.as_str()), Some("No 🚭"));
    assert_eq!(state.contacts, Some(ContactsPanel::Empty));
    assert!(state.medical.as_ref().is_some_and(MedicalPanel::is_empty));
}

#[test]
fn signal_sink_commits_into_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let mut signal = RwSignal::new(ProfileState::default());
        signal.update_headers(profile_headers("Ann"));
        signal.render_personal_info(vec![]);
        let state = signal.get_untracked();
        assert_eq!(state.headers.map(|h| h.portal_title), Some("Ann's Portal".to_owned()));
        assert_eq!(state.personal_info, Some(vec![]));
    });
}
