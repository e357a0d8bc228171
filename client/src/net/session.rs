//! Session provider backed by the auth SDK's persisted session.
//!
//! The sign-in flow (outside this app) stores the session as JSON in
//! `localStorage`. An expired entry that still carries a refresh token is
//! exchanged for a fresh one at the backend's token endpoint and written back;
//! an absent, unrefreshable, or unreadable entry means "no session", which
//! callers treat as a valid state rather than an error.
//!
//! Client-side (hydrate): `localStorage` plus a `gloo-net` refresh call.
//! Server-side (SSR) and native tests: there is never a session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Deserialize;
use serde_json::Value;

use super::types::Session;
use crate::config::PortalConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The browser refused access to `localStorage`.
    #[error("session storage unavailable")]
    StorageUnavailable,
    /// The refresh request never got an answer from the backend.
    #[error("session refresh failed: {0}")]
    Refresh(String),
}

/// Supplies the current authenticated identity, if any.
#[async_trait::async_trait(?Send)]
pub trait SessionProvider {
    /// # Errors
    ///
    /// Returns [`SessionError`] when the session store cannot be read or the
    /// refresh endpoint cannot be reached.
    async fn current_session(&self) -> Result<Option<Session>, SessionError>;
}

#[derive(Debug, Deserialize)]
struct StoredSession {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: StoredUser,
}

#[derive(Debug, Deserialize)]
struct StoredUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// What a persisted session entry is worth at a given instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredSessionState {
    /// Usable as-is.
    Active(Session),
    /// Expired, but exchangeable for a new session.
    Expired { refresh_token: String },
    /// Malformed, incomplete, or expired with nothing to refresh with.
    Absent,
}

/// Classify the persisted session JSON. `expires_at` is in seconds and a
/// session expires once it is not after `now_secs`.
#[must_use]
pub fn classify_stored_session(raw: &str, now_secs: i64) -> StoredSessionState {
    let Ok(stored) = serde_json::from_str::<StoredSession>(raw) else {
        return StoredSessionState::Absent;
    };
    if stored.access_token.is_empty() || stored.user.id.is_empty() {
        return StoredSessionState::Absent;
    }
    if stored.expires_at.is_some_and(|exp| exp <= now_secs) {
        return match stored.refresh_token.filter(|t| !t.is_empty()) {
            Some(refresh_token) => StoredSessionState::Expired { refresh_token },
            None => StoredSessionState::Absent,
        };
    }
    StoredSessionState::Active(Session {
        user_id: stored.user.id,
        email: stored.user.email,
        access_token: stored.access_token,
    })
}

/// The session in `raw` if it is usable without a refresh.
#[must_use]
pub fn parse_stored_session(raw: &str, now_secs: i64) -> Option<Session> {
    match classify_stored_session(raw, now_secs) {
        StoredSessionState::Active(session) => Some(session),
        StoredSessionState::Expired { .. } | StoredSessionState::Absent => None,
    }
}

/// Accept a token-endpoint response body.
///
/// Returns the new session together with the JSON to persist in its place.
/// A body that only carries `expires_in` gets an absolute `expires_at` so the
/// persisted entry classifies the same way on the next read. `None` means the
/// response does not describe a usable session.
#[must_use]
pub fn accept_refreshed_session(body: &str, now_secs: i64) -> Option<(Session, String)> {
    let mut value: Value = serde_json::from_str(body).ok()?;
    let fields = value.as_object_mut()?;
    if fields.get("expires_at").and_then(Value::as_i64).is_none() {
        if let Some(expires_in) = fields.get("expires_in").and_then(Value::as_i64) {
            fields.insert("expires_at".to_owned(), Value::from(now_secs + expires_in));
        }
    }
    let stored = value.to_string();
    parse_stored_session(&stored, now_secs).map(|session| (session, stored))
}

/// Reads the session from `localStorage` under a fixed key, refreshing it
/// through the backend's auth endpoint when it has expired.
#[derive(Clone, Debug)]
pub struct BrowserSessionProvider {
    storage_key: String,
    backend_url: String,
    anon_key: String,
}

impl BrowserSessionProvider {
    #[must_use]
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            storage_key: config.session_key.clone(),
            backend_url: config.backend_url.clone(),
            anon_key: config.backend_anon_key.clone(),
        }
    }

    /// Token endpoint, e.g. `https://x.supabase.co/auth/v1/token?grant_type=refresh_token`.
    #[must_use]
    pub fn refresh_endpoint(&self) -> String {
        format!("{}/auth/v1/token?grant_type=refresh_token", self.backend_url)
    }

    /// Exchange `refresh_token` for a new session. `Ok(None)` when the backend
    /// rejects the token or answers with something unusable.
    #[cfg(feature = "hydrate")]
    async fn refresh(&self, refresh_token: &str, now_secs: i64) -> Result<Option<(Session, String)>, SessionError> {
        let resp = gloo_net::http::Request::post(&self.refresh_endpoint())
            .header("apikey", &self.anon_key)
            .header("Accept", "application/json")
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .map_err(|e| SessionError::Refresh(e.to_string()))?
            .send()
            .await
            .map_err(|e| SessionError::Refresh(e.to_string()))?;
        if !resp.ok() {
            leptos::logging::warn!("session refresh rejected: status {}", resp.status());
            return Ok(None);
        }
        let body = resp.text().await.map_err(|e| SessionError::Refresh(e.to_string()))?;
        let refreshed = accept_refreshed_session(&body, now_secs);
        if refreshed.is_none() {
            leptos::logging::warn!("session refresh returned an unusable session");
        }
        Ok(refreshed)
    }
}

#[async_trait::async_trait(?Send)]
impl SessionProvider for BrowserSessionProvider {
    async fn current_session(&self) -> Result<Option<Session>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(SessionError::StorageUnavailable)?;
            let Some(raw) = storage.get_item(&self.storage_key).ok().flatten() else {
                return Ok(None);
            };
            #[allow(clippy::cast_possible_truncation)]
            let now_secs = (js_sys::Date::now() / 1000.0) as i64;
            match classify_stored_session(&raw, now_secs) {
                StoredSessionState::Active(session) => Ok(Some(session)),
                StoredSessionState::Absent => Ok(None),
                StoredSessionState::Expired { refresh_token } => {
                    let Some((session, stored)) = self.refresh(&refresh_token, now_secs).await? else {
                        return Ok(None);
                    };
                    if storage.set_item(&self.storage_key, &stored).is_err() {
                        leptos::logging::warn!("could not persist refreshed session");
                    }
                    Ok(Some(session))
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.storage_key, &self.anon_key);
            Ok(None)
        }
    }
}
