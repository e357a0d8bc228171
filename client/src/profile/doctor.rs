//! Doctor contact lookup for the "call doctor" action.
//!
//! The lookup is an ordered chain of strategies; the first one that yields a
//! usable phone number wins. A doctor contact is preferred, and any emergency
//! contact is accepted as a fallback.

#[cfg(test)]
#[path = "doctor_test.rs"]
mod doctor_test;

use serde_json::Value;

use crate::error::{PortalError, report_error};
use crate::net::store::{Collection, Query, RecordStore, StoreError};
use crate::notify::Notifier;

pub const DOCTOR_RELATIONSHIP: &str = "Doctor";

/// One step of the doctor lookup.
///
/// A matched row whose phone is missing or blank counts as no match, so a
/// doctor contact without a number falls through to the next step instead of
/// stopping the chain with an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactLookup {
    /// First contact whose relationship label equals the given value.
    Relationship(&'static str),
    /// First contact regardless of relationship.
    AnyContact,
}

impl ContactLookup {
    #[must_use]
    pub fn query(self, user_id: &str) -> Query {
        let base = Query::owned_by(Collection::EmergencyContacts, user_id);
        match self {
            Self::Relationship(relationship) => base.eq("relationship", relationship).limit(1),
            Self::AnyContact => base.limit(1),
        }
    }
}

pub const DOCTOR_CONTACT_CHAIN: [ContactLookup; 2] =
    [ContactLookup::Relationship(DOCTOR_RELATIONSHIP), ContactLookup::AnyContact];

/// Try each lookup in order and return the first non-empty phone number.
///
/// # Errors
///
/// Returns the first [`StoreError`] hit; later strategies are not attempted.
pub async fn first_phone<S: RecordStore + ?Sized>(
    store: &S,
    user_id: &str,
    chain: &[ContactLookup],
) -> Result<Option<String>, StoreError> {
    for lookup in chain {
        let rows = store.select(&lookup.query(user_id)).await?;
        if let Some(phone) = rows.first().and_then(phone_of) {
            return Ok(Some(phone));
        }
    }
    Ok(None)
}

fn phone_of(row: &Value) -> Option<String> {
    row.get("phone")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
}

/// Resolve the number to dial for the call-doctor action.
///
/// Returns `None` when the user has no contacts at all. Store failures are
/// reported (log + error toast) and also produce `None`; they never propagate.
pub async fn resolve_doctor_phone<S, N>(store: &S, notifier: &N, user_id: &str) -> Option<String>
where
    S: RecordStore + ?Sized,
    N: Notifier + ?Sized,
{
    match first_phone(store, user_id, &DOCTOR_CONTACT_CHAIN).await {
        Ok(phone) => phone,
        Err(e) => {
            report_error(&PortalError::DoctorLookup(e), notifier);
            None
        }
    }
}
