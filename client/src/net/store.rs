//! Record-store access for the five profile collections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend exposes each collection as a REST table. Queries are limited to
//! equality filters plus an optional row limit, which is all the dashboard
//! needs. [`RecordStore`] is the seam the aggregator and the doctor resolver
//! depend on; [`RestRecordStore`] is the browser implementation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the REST store reports
//! [`StoreError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::config::PortalConfig;

/// The logical collections a profile is assembled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    PersonalInfo,
    MedicalInfo,
    Lifestyle,
    EmergencyContacts,
}

impl Collection {
    /// Backend table name.
    #[must_use]
    pub fn table(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::PersonalInfo => "personal_info",
            Self::MedicalInfo => "medical_info",
            Self::Lifestyle => "lifestyle",
            Self::EmergencyContacts => "emergency_contacts",
        }
    }

    /// Column holding the owning user's id. The `users` table is keyed by
    /// its own primary key.
    #[must_use]
    pub fn owner_column(self) -> &'static str {
        match self {
            Self::Users => "id",
            _ => "user_id",
        }
    }
}

/// Equality predicate on one column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: String,
}

/// A select over one collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub collection: Collection,
    pub filters: Vec<Filter>,
    pub limit: Option<usize>,
}

impl Query {
    /// Select every row of `collection` owned by `user_id`.
    #[must_use]
    pub fn owned_by(collection: Collection, user_id: &str) -> Self {
        Self {
            collection,
            filters: vec![Filter { column: collection.owner_column(), value: user_id.to_owned() }],
            limit: None,
        }
    }

    #[must_use]
    pub fn eq(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.filters.push(Filter { column, value: value.into() });
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// REST query-string pairs: `select=*`, one `column=eq.value` per filter,
    /// then `limit=n` when set.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_owned(), "*".to_owned())];
        params.extend(
            self.filters
                .iter()
                .map(|f| (f.column.to_owned(), format!("eq.{}", f.value))),
        );
        if let Some(limit) = self.limit {
            params.push(("limit".to_owned(), limit.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request could not be sent.
    #[error("store request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("store response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body was not a JSON array of rows.
    #[error("store response parse failed: {0}")]
    Decode(String),

    /// No HTTP transport in this build (server render or native).
    #[error("record store unavailable outside the browser")]
    Unavailable,
}

/// Read access to the backend collections.
#[async_trait::async_trait(?Send)]
pub trait RecordStore {
    /// Run `query` and return the matching rows as raw JSON objects.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the request fails or the body is not an
    /// array of rows.
    async fn select(&self, query: &Query) -> Result<Vec<serde_json::Value>, StoreError>;
}

/// REST implementation of [`RecordStore`] bound to one session's token.
#[derive(Clone, Debug)]
pub struct RestRecordStore {
    base_url: String,
    anon_key: String,
    access_token: String,
}

impl RestRecordStore {
    #[must_use]
    pub fn new(config: &PortalConfig, access_token: &str) -> Self {
        Self {
            base_url: config.backend_url.clone(),
            anon_key: config.backend_anon_key.clone(),
            access_token: access_token.to_owned(),
        }
    }

    /// Table endpoint, e.g. `https://x.supabase.co/rest/v1/users`.
    #[must_use]
    pub fn endpoint(&self, collection: Collection) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection.table())
    }
}

#[async_trait::async_trait(?Send)]
impl RecordStore for RestRecordStore {
    async fn select(&self, query: &Query) -> Result<Vec<serde_json::Value>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let params = query.params();
            let resp = gloo_net::http::Request::get(&self.endpoint(query.collection))
                .query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .header("apikey", &self.anon_key)
                .header("Authorization", &format!("Bearer {}", self.access_token))
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(StoreError::Status { status, body });
            }
            resp.json::<Vec<serde_json::Value>>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, &self.anon_key, &self.access_token);
            Err(StoreError::Unavailable)
        }
    }
}
