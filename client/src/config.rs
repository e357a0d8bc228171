//! Portal configuration baked in from the build environment.
//!
//! The WASM bundle has no process environment at runtime, so values are
//! captured with `option_env!` when the crate is compiled and parsed through
//! [`PortalConfig::from_lookup`], which tests drive with a plain closure.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_GEOCODER_CLIENT_ID: &str = "HealthDashboard";
pub const DEFAULT_SIGN_UP_PATH: &str = "/sign-up";
pub const DEFAULT_GEOLOCATION_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required build-time variable was not set.
    #[error("missing config: {var} not set")]
    Missing { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Backend-as-a-service base URL without a trailing slash.
    pub backend_url: String,
    /// Public (anonymous) API key sent with every record-store request.
    pub backend_anon_key: String,
    /// localStorage key holding the persisted auth session.
    pub session_key: String,
    pub geocoder_url: String,
    /// Client identifier the geocoding service requires on every request.
    pub geocoder_client_id: String,
    /// Where unauthenticated visitors are sent when they open the profile.
    pub sign_up_path: String,
    pub geolocation_timeout_ms: u32,
}

impl PortalConfig {
    /// Build the config from variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `PORTAL_BACKEND_URL` or
    /// `PORTAL_BACKEND_ANON_KEY` was not set for the build.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "PORTAL_BACKEND_URL" => option_env!("PORTAL_BACKEND_URL"),
                "PORTAL_BACKEND_ANON_KEY" => option_env!("PORTAL_BACKEND_ANON_KEY"),
                "PORTAL_SESSION_KEY" => option_env!("PORTAL_SESSION_KEY"),
                "PORTAL_GEOCODER_URL" => option_env!("PORTAL_GEOCODER_URL"),
                "PORTAL_GEOCODER_CLIENT_ID" => option_env!("PORTAL_GEOCODER_CLIENT_ID"),
                "PORTAL_SIGN_UP_PATH" => option_env!("PORTAL_SIGN_UP_PATH"),
                "PORTAL_GEOLOCATION_TIMEOUT_MS" => option_env!("PORTAL_GEOLOCATION_TIMEOUT_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// Required:
    /// - `PORTAL_BACKEND_URL`
    /// - `PORTAL_BACKEND_ANON_KEY`
    ///
    /// Optional:
    /// - `PORTAL_SESSION_KEY`: derived from the backend host when absent
    /// - `PORTAL_GEOCODER_URL`: default Nominatim endpoint
    /// - `PORTAL_GEOCODER_CLIENT_ID`: default `HealthDashboard`
    /// - `PORTAL_SIGN_UP_PATH`: default `/sign-up`
    /// - `PORTAL_GEOLOCATION_TIMEOUT_MS`: default 5000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when a required key is absent or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend_url = non_blank("PORTAL_BACKEND_URL")
            .ok_or(ConfigError::Missing { var: "PORTAL_BACKEND_URL" })?
            .trim_end_matches('/')
            .to_owned();
        let backend_anon_key =
            non_blank("PORTAL_BACKEND_ANON_KEY").ok_or(ConfigError::Missing { var: "PORTAL_BACKEND_ANON_KEY" })?;
        let session_key = non_blank("PORTAL_SESSION_KEY").unwrap_or_else(|| default_session_key(&backend_url));
        let geocoder_url = non_blank("PORTAL_GEOCODER_URL")
            .unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let geocoder_client_id =
            non_blank("PORTAL_GEOCODER_CLIENT_ID").unwrap_or_else(|| DEFAULT_GEOCODER_CLIENT_ID.to_owned());
        let sign_up_path = non_blank("PORTAL_SIGN_UP_PATH").unwrap_or_else(|| DEFAULT_SIGN_UP_PATH.to_owned());
        let geolocation_timeout_ms = non_blank("PORTAL_GEOLOCATION_TIMEOUT_MS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_GEOLOCATION_TIMEOUT_MS);

        Ok(Self {
            backend_url,
            backend_anon_key,
            session_key,
            geocoder_url,
            geocoder_client_id,
            sign_up_path,
            geolocation_timeout_ms,
        })
    }
}

/// Session key the auth SDK uses: `sb-<project-ref>-auth-token`, where the
/// project ref is the first label of the backend host.
fn default_session_key(backend_url: &str) -> String {
    let host = backend_url
        .split_once("://")
        .map_or(backend_url, |(_, rest)| rest)
        .split(['/', ':'])
        .next()
        .unwrap_or_default();
    let project_ref = host.split('.').next().filter(|s| !s.is_empty()).unwrap_or("portal");
    format!("sb-{project_ref}-auth-token")
}
