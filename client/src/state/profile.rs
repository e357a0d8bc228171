#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::profile::ProfileSink;
use crate::profile::sections::{ContactsPanel, DataItem, MedicalPanel, ProfileHeaders};

/// Rendered profile panels as last committed by an aggregation pass.
///
/// Every field is `None` until the first successful pass; the panels render
/// empty until then.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub headers: Option<ProfileHeaders>,
    pub personal_info: Option<Vec<DataItem>>,
    pub medical: Option<MedicalPanel>,
    pub lifestyle: Option<Vec<DataItem>>,
    pub contacts: Option<ContactsPanel>,
}

impl ProfileState {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.headers.is_some()
    }
}

impl ProfileSink for ProfileState {
    fn update_headers(&mut self, headers: ProfileHeaders) {
        self.headers = Some(headers);
    }

    fn render_personal_info(&mut self, items: Vec<DataItem>) {
        self.personal_info = Some(items);
    }

    fn render_medical_info(&mut self, panel: MedicalPanel) {
        self.medical = Some(panel);
    }

    fn render_lifestyle(&mut self, items: Vec<DataItem>) {
        self.lifestyle = Some(items);
    }

    fn render_emergency_contacts(&mut self, panel: ContactsPanel) {
        self.contacts = Some(panel);
    }
}

/// Commits straight into the shared reactive profile.
impl ProfileSink for RwSignal<ProfileState> {
    fn update_headers(&mut self, headers: ProfileHeaders) {
        self.update(|p| p.update_headers(headers));
    }

    fn render_personal_info(&mut self, items: Vec<DataItem>) {
        self.update(|p| p.render_personal_info(items));
    }

    fn render_medical_info(&mut self, panel: MedicalPanel) {
        self.update(|p| p.render_medical_info(panel));
    }

    fn render_lifestyle(&mut self, items: Vec<DataItem>) {
        self.update(|p| p.render_lifestyle(items));
    }

    fn render_emergency_contacts(&mut self, panel: ContactsPanel) {
        self.update(|p| p.render_emergency_contacts(panel));
    }
}
