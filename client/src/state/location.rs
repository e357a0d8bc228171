#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use crate::net::geocode::Address;

/// One device position report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy radius in meters.
    pub accuracy: f64,
}

impl Fix {
    #[must_use]
    pub fn coordinates_text(&self) -> String {
        format!("Coordinates: {:.6}, {:.6}", self.latitude, self.longitude)
    }

    #[must_use]
    pub fn accuracy_text(&self) -> String {
        format!("Accuracy: {:.0} meters", self.accuracy)
    }
}

/// What the location card shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LocationState {
    #[default]
    Pending,
    Resolved { address: String, fix: Fix },
    /// `fix` is kept when only the address lookup failed.
    Failed { message: String, fix: Option<Fix> },
}

impl LocationState {
    #[must_use]
    pub fn resolved(fix: Fix, address: &Address) -> Self {
        Self::Resolved { address: address.display_line(), fix }
    }

    #[must_use]
    pub fn failed(message: &str, fix: Option<Fix>) -> Self {
        Self::Failed { message: message.to_owned(), fix }
    }

    /// Whether coordinates are on screen, with or without an address.
    #[must_use]
    pub fn has_fix(&self) -> bool {
        matches!(self, Self::Resolved { .. } | Self::Failed { fix: Some(_), .. })
    }
}
