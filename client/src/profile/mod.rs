//! Profile aggregation: fetch the five collections for one user and commit
//! the rendered sections.
//!
//! ARCHITECTURE
//! ============
//! `fetch_profile` fans out one query per collection and joins them; any
//! failed query fails the whole pass. `load_all_user_data` wraps that with
//! error reporting and a request-generation check, then hands the bundle to a
//! [`ProfileSink`] through the pure renderers in [`sections`]. A pass either
//! commits all five sections or none of them.


pub mod doctor;
pub mod sections;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{PortalError, report_error};
use crate::net::store::{Collection, Query, RecordStore, StoreError};
use crate::net::types::{EmergencyContact, Lifestyle, MedicalInfo, PersonalInfo, User};
use crate::notify::Notifier;
use crate::util::generation::RequestGeneration;
use sections::{ContactsPanel, DataItem, MedicalPanel, ProfileHeaders};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A singleton collection had no row for the user.
    #[error("no {} record for user", .collection.table())]
    MissingRecord { collection: Collection },

    /// A singleton collection had more than one row for the user.
    #[error("expected one {} record, found {count}", .collection.table())]
    AmbiguousRecord { collection: Collection, count: usize },

    /// A row did not match the expected shape.
    #[error("malformed {} record: {reason}", .collection.table())]
    MalformedRecord { collection: Collection, reason: String },
}

/// Everything one aggregation pass fetched.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileBundle {
    pub user: User,
    pub personal: PersonalInfo,
    pub medical: MedicalInfo,
    pub lifestyle: Lifestyle,
    pub contacts: Vec<EmergencyContact>,
}

/// Destination for rendered sections. Each call fully replaces the previous
/// content of its panel.
pub trait ProfileSink {
    fn update_headers(&mut self, headers: ProfileHeaders);
    fn render_personal_info(&mut self, items: Vec<DataItem>);
    fn render_medical_info(&mut self, panel: MedicalPanel);
    fn render_lifestyle(&mut self, items: Vec<DataItem>);
    fn render_emergency_contacts(&mut self, panel: ContactsPanel);
}

/// Whether a successful pass reached the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// A later pass started before this one settled; its result was dropped.
    Superseded,
}

/// Fetch all five collections for `user_id` concurrently.
///
/// # Errors
///
/// Fails if any query fails, any singleton collection does not hold exactly
/// one row, or any row cannot be decoded.
pub async fn fetch_profile<S: RecordStore + ?Sized>(store: &S, user_id: &str) -> Result<ProfileBundle, ProfileError> {
    let users = Query::owned_by(Collection::Users, user_id);
    let personal = Query::owned_by(Collection::PersonalInfo, user_id);
    let medical = Query::owned_by(Collection::MedicalInfo, user_id);
    let lifestyle = Query::owned_by(Collection::Lifestyle, user_id);
    let contacts = Query::owned_by(Collection::EmergencyContacts, user_id);

    let (users, personal, medical, lifestyle, contacts) = futures::try_join!(
        store.select(&users),
        store.select(&personal),
        store.select(&medical),
        store.select(&lifestyle),
        store.select(&contacts),
    )?;

    Ok(ProfileBundle {
        user: single(Collection::Users, users)?,
        personal: single(Collection::PersonalInfo, personal)?,
        medical: single(Collection::MedicalInfo, medical)?,
        lifestyle: single(Collection::Lifestyle, lifestyle)?,
        contacts: contacts
            .into_iter()
            .map(|row| decode(Collection::EmergencyContacts, row))
            .collect::<Result<_, _>>()?,
    })
}

fn single<T: DeserializeOwned>(collection: Collection, mut rows: Vec<Value>) -> Result<T, ProfileError> {
    match rows.len() {
        0 => Err(ProfileError::MissingRecord { collection }),
        1 => decode(collection, rows.remove(0)),
        count => Err(ProfileError::AmbiguousRecord { collection, count }),
    }
}

fn decode<T: DeserializeOwned>(collection: Collection, row: Value) -> Result<T, ProfileError> {
    serde_json::from_value(row).map_err(|e| ProfileError::MalformedRecord { collection, reason: e.to_string() })
}

/// Run every section renderer over `bundle` and commit the results.
pub fn render_profile<K: ProfileSink + ?Sized>(sink: &mut K, bundle: &ProfileBundle) {
    sink.update_headers(sections::profile_headers(&bundle.user.name));
    sink.render_personal_info(sections::personal_info_items(&bundle.user, &bundle.personal));
    sink.render_medical_info(sections::medical_panel(&bundle.medical));
    sink.render_lifestyle(sections::lifestyle_items(&bundle.lifestyle));
    sink.render_emergency_contacts(sections::contacts_panel(&bundle.contacts));
}

/// One aggregation pass: fetch, then render into `sink` if this pass is
/// still the latest one started on `generation`.
///
/// # Errors
///
/// On any fetch or shape failure the error is logged, a single error toast is
/// raised, nothing is rendered, and the error is returned so callers can skip
/// dependent UI transitions.
pub async fn load_all_user_data<S, N, K>(
    store: &S,
    notifier: &N,
    sink: &mut K,
    generation: &RequestGeneration,
    user_id: &str,
) -> Result<CommitOutcome, PortalError>
where
    S: RecordStore + ?Sized,
    N: Notifier + ?Sized,
    K: ProfileSink + ?Sized,
{
    let ticket = generation.begin();
    let bundle = match fetch_profile(store, user_id).await {
        Ok(bundle) => bundle,
        Err(e) => {
            let err = PortalError::from(e);
            report_error(&err, notifier);
            return Err(err);
        }
    };

    if !generation.is_current(ticket) {
        leptos::logging::log!("dropping superseded profile load for {user_id}");
        return Ok(CommitOutcome::Superseded);
    }
    render_profile(sink, &bundle);
    Ok(CommitOutcome::Applied)
}
