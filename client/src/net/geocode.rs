//! Reverse geocoding of device coordinates into a display address.
//!
//! Talks to a Nominatim-compatible `/reverse` endpoint. The service requires
//! a client identifier header on every request; it is taken from config.
//! URL parameters, response parsing, and address joining are pure so they are
//! covered natively.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geocode_test.rs"]
mod geocode_test;

use serde::Deserialize;

use crate::config::PortalConfig;

const ZOOM: &str = "18";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeocodeError {
    #[error("geocode request failed: {0}")]
    Request(String),

    #[error("geocode response error: status {status}")]
    Status { status: u16 },

    #[error("geocode response parse failed: {0}")]
    Decode(String),

    #[error("geocoding unavailable outside the browser")]
    Unavailable,
}

/// Structured address returned by the geocoder. Every component is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub suburb: Option<String>,
    pub neighbourhood: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
}

impl Address {
    /// Join present components with `", "` in fixed priority order:
    /// house number, road, suburb or neighbourhood, city or town or village,
    /// state, postcode.
    #[must_use]
    pub fn display_line(&self) -> String {
        [
            present(self.house_number.as_ref()),
            present(self.road.as_ref()),
            present(self.suburb.as_ref()).or_else(|| present(self.neighbourhood.as_ref())),
            present(self.city.as_ref())
                .or_else(|| present(self.town.as_ref()))
                .or_else(|| present(self.village.as_ref())),
            present(self.state.as_ref()),
            present(self.postcode.as_ref()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Address,
}

/// Extract the `address` object from a reverse-geocoding response body.
///
/// # Errors
///
/// Returns [`GeocodeError::Decode`] when the body is not JSON or carries no
/// `address` (the service reports lookup failures that way with status 200).
pub fn parse_reverse_response(body: &str) -> Result<Address, GeocodeError> {
    serde_json::from_str::<ReverseResponse>(body)
        .map(|r| r.address)
        .map_err(|e| GeocodeError::Decode(e.to_string()))
}

/// Query-string pairs for a reverse lookup at maximum address detail.
#[must_use]
pub fn reverse_params(latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
    vec![
        ("format", "json".to_owned()),
        ("lat", latitude.to_string()),
        ("lon", longitude.to_string()),
        ("zoom", ZOOM.to_owned()),
        ("addressdetails", "1".to_owned()),
    ]
}

/// Resolves coordinates to an [`Address`].
#[async_trait::async_trait(?Send)]
pub trait ReverseGeocoder {
    /// # Errors
    ///
    /// Returns [`GeocodeError`] on transport failure, non-success status, or
    /// an undecodable body.
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Address, GeocodeError>;
}

#[derive(Clone, Debug)]
pub struct NominatimClient {
    base_url: String,
    client_id: String,
}

impl NominatimClient {
    #[must_use]
    pub fn new(config: &PortalConfig) -> Self {
        Self { base_url: config.geocoder_url.clone(), client_id: config.geocoder_client_id.clone() }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/reverse", self.base_url)
    }
}

#[async_trait::async_trait(?Send)]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Address, GeocodeError> {
        #[cfg(feature = "hydrate")]
        {
            let params = reverse_params(latitude, longitude);
            let resp = gloo_net::http::Request::get(&self.endpoint())
                .query(params.iter().map(|(k, v)| (*k, v.as_str())))
                .header("Accept", "application/json")
                .header("User-Agent", &self.client_id)
                .send()
                .await
                .map_err(|e| GeocodeError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(GeocodeError::Status { status: resp.status() });
            }
            let body = resp.text().await.map_err(|e| GeocodeError::Request(e.to_string()))?;
            parse_reverse_response(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (latitude, longitude, &self.client_id);
            Err(GeocodeError::Unavailable)
        }
    }
}
