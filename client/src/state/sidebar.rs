//! Sidebar navigation state.
//!
//! DESIGN
//! ======
//! Two-state machine (`closed`/`open`) plus a single-select section inside the
//! open sidebar. The overlay and content shift follow `open` directly, so the
//! chrome can never disagree with the panel. Opening only happens after a
//! successful profile load; that gate lives in the dashboard page.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Data sections reachable from the sidebar navigation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    PersonalInfo,
    MedicalHistory,
    Lifestyle,
    EmergencyContacts,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::PersonalInfo, Self::MedicalHistory, Self::Lifestyle, Self::EmergencyContacts];

    /// Value of the navigation item's `data-section` attribute.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::PersonalInfo => "personal-info",
            Self::MedicalHistory => "medical-history",
            Self::Lifestyle => "lifestyle",
            Self::EmergencyContacts => "emergency-contacts",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Element id of the section panel, e.g. `lifestyle-section`.
    #[must_use]
    pub fn element_id(self) -> String {
        format!("{}-section", self.key())
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::MedicalHistory => "Medical History",
            Self::Lifestyle => "Lifestyle",
            Self::EmergencyContacts => "Emergency Contacts",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
    /// Highlighted navigation item.
    pub active_nav: Option<Section>,
    /// Section panel currently shown; `None` shows only the navigation list.
    pub visible_section: Option<Section>,
}

impl SidebarState {
    /// Open the sidebar on the navigation list with no data section shown.
    pub fn open(&mut self) {
        self.open = true;
        self.visible_section = None;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Make `section` the only active navigation item and visible panel.
    pub fn select(&mut self, section: Section) {
        self.active_nav = Some(section);
        self.visible_section = Some(section);
    }

    #[must_use]
    pub fn is_visible(&self, section: Section) -> bool {
        self.visible_section == Some(section)
    }

    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        self.active_nav == Some(section)
    }
}
