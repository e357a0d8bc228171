//! Session-gated flows behind the dashboard's profile and call-doctor
//! buttons.
//!
//! Each flow returns what the page should do next instead of touching the
//! browser itself, so redirect, alert and sidebar decisions are tested
//! natively. The page applies the outcome.

#[cfg(test)]
#[path = "dashboard_actions_test.rs"]
mod dashboard_actions_test;

use crate::error::{PortalError, report_error};
use crate::net::session::SessionProvider;
use crate::net::store::RecordStore;
use crate::net::types::Session;
use crate::notify::Notifier;
use crate::profile::doctor::resolve_doctor_phone;
use crate::profile::{CommitOutcome, ProfileSink, load_all_user_data};
use crate::util::browser::{assign_location, show_alert};
use crate::util::generation::RequestGeneration;

pub const PROFILE_LOAD_ALERT: &str = "Error loading profile data";
pub const NO_DOCTOR_ALERT: &str = "No doctor contact number found. Please add emergency contacts in your profile.";
pub const CALL_FAILED_ALERT: &str = "Unable to make call. Please check your emergency contacts.";

/// Result of one profile-open attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileOpen {
    /// No session; send the visitor to sign up.
    SignUp,
    /// Sections committed; open the sidebar.
    Open,
    /// A newer attempt started first and owns the sidebar transition.
    Stale,
    /// Already reported; keep the sidebar closed.
    Failed,
}

/// Look up the session and run one aggregation pass for its user.
/// `make_store` builds a record store authorised for that session.
pub async fn open_profile<P, S, F, N, K>(
    sessions: &P,
    make_store: F,
    notifier: &N,
    sink: &mut K,
    generation: &RequestGeneration,
) -> ProfileOpen
where
    P: SessionProvider + ?Sized,
    S: RecordStore,
    F: FnOnce(&Session) -> S,
    N: Notifier + ?Sized,
    K: ProfileSink + ?Sized,
{
    let session = match sessions.current_session().await {
        Ok(Some(session)) => session,
        Ok(None) => {
            leptos::logging::log!("no active session");
            return ProfileOpen::SignUp;
        }
        Err(e) => {
            report_error(&PortalError::from(e), notifier);
            return ProfileOpen::Failed;
        }
    };

    let store = make_store(&session);
    match load_all_user_data(&store, notifier, sink, generation, &session.user_id).await {
        Ok(CommitOutcome::Applied) => ProfileOpen::Open,
        Ok(CommitOutcome::Superseded) => ProfileOpen::Stale,
        Err(_) => ProfileOpen::Failed,
    }
}

/// What the call-doctor button ends up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallAction {
    /// Hand the `tel:` URI to the browser.
    Dial(String),
    Alert(&'static str),
}

impl CallAction {
    pub fn perform(&self) {
        match self {
            Self::Dial(uri) => assign_location(uri),
            Self::Alert(message) => show_alert(message),
        }
    }
}

#[must_use]
pub fn tel_uri(phone: &str) -> String {
    format!("tel:{}", phone.trim())
}

pub async fn call_doctor<P, S, F, N>(sessions: &P, make_store: F, notifier: &N) -> CallAction
where
    P: SessionProvider + ?Sized,
    S: RecordStore,
    F: FnOnce(&Session) -> S,
    N: Notifier + ?Sized,
{
    let session = match sessions.current_session().await {
        Ok(Some(session)) => session,
        Ok(None) => {
            leptos::logging::error!("error making doctor call: no active session");
            return CallAction::Alert(CALL_FAILED_ALERT);
        }
        Err(e) => {
            report_error(&PortalError::from(e), notifier);
            return CallAction::Alert(CALL_FAILED_ALERT);
        }
    };

    let store = make_store(&session);
    match resolve_doctor_phone(&store, notifier, &session.user_id).await {
        Some(phone) => CallAction::Dial(tel_uri(&phone)),
        None => CallAction::Alert(NO_DOCTOR_ALERT),
    }
}
