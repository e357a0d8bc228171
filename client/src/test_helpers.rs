//! Shared doubles for unit tests: an in-memory record store and a recording notifier.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use serde_json::{Value, json};

use crate::net::store::{Collection, Query, RecordStore, StoreError};
use crate::notify::{Notifier, Severity};

/// Rows per collection, filtered with the same equality + limit semantics as
/// the REST store. Collections listed in `failing` return a request error.
#[derive(Default)]
pub struct MemoryStore {
    rows: HashMap<Collection, Vec<Value>>,
    failing: HashSet<Collection>,
    pub queries: RefCell<Vec<Query>>,
}

impl MemoryStore {
    pub fn with_rows(mut self, collection: Collection, rows: Vec<Value>) -> Self {
        self.rows.entry(collection).or_default().extend(rows);
        self
    }

    pub fn failing(mut self, collection: Collection) -> Self {
        self.failing.insert(collection);
        self
    }
}

fn column_matches(row: &Value, column: &str, expected: &str) -> bool {
    match row.get(column) {
        Some(Value::String(s)) => s == expected,
        Some(other) => other.to_string() == expected,
        None => false,
    }
}

#[async_trait::async_trait(?Send)]
impl RecordStore for MemoryStore {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, StoreError> {
        self.queries.borrow_mut().push(query.clone());
        if self.failing.contains(&query.collection) {
            return Err(StoreError::Request("connection reset".to_owned()));
        }
        let rows = self.rows.get(&query.collection).cloned().unwrap_or_default();
        let matched = rows
            .into_iter()
            .filter(|row| query.filters.iter().all(|f| column_matches(row, f.column, &f.value)));
        Ok(match query.limit {
            Some(limit) => matched.take(limit).collect(),
            None => matched.collect(),
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: RefCell<Vec<(String, Severity)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.sent.borrow_mut().push((message.to_owned(), severity));
    }
}

pub fn user_row(id: &str) -> Value {
    json!({ "id": id, "name": "Ann", "email": "ann@example.test" })
}

pub fn personal_row(user_id: &str) -> Value {
    json!({ "user_id": user_id, "dob": "1990-05-14", "blood_type": null, "height_cm": 170, "weight_kg": null })
}

pub fn medical_row(user_id: &str) -> Value {
    json!({
        "user_id": user_id,
        "diabetes": true,
        "hypertension": false,
        "heart_disease": false,
        "asthma": false,
        "allergies": false,
        "notes": "watch sugar"
    })
}

pub fn lifestyle_row(user_id: &str) -> Value {
    json!({ "user_id": user_id, "smoking": false, "alcohol": true, "exercise": true })
}

pub fn contact_row(user_id: &str, name: &str, relationship: &str, phone: &str) -> Value {
    json!({
        "user_id": user_id,
        "name": name,
        "relationship": relationship,
        "phone": phone,
        "email": null,
        "is_primary": false
    })
}

/// A store holding one complete profile for `user_id` with the given contacts.
pub fn complete_store(user_id: &str, contacts: Vec<Value>) -> MemoryStore {
    MemoryStore::default()
        .with_rows(Collection::Users, vec![user_row(user_id)])
        .with_rows(Collection::PersonalInfo, vec![personal_row(user_id)])
        .with_rows(Collection::MedicalInfo, vec![medical_row(user_id)])
        .with_rows(Collection::Lifestyle, vec![lifestyle_row(user_id)])
        .with_rows(Collection::EmergencyContacts, contacts)
}
