//! Record DTOs for the backend collections and the persisted session.
//!
//! DESIGN
//! ======
//! Field names mirror the backend column names so rows decode directly from
//! the REST payload. Nullable boolean columns decode to `false`, matching how
//! the dashboard treats a missing flag. Nullable text columns stay `Option`;
//! a null value is a display concern, never a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Account row from the `users` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name shown in the sidebar headers.
    pub name: String,
    /// Contact email for the account.
    #[serde(default)]
    pub email: Option<String>,
}

/// Row from the `personal_info` table, one per user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Date of birth as an ISO 8601 date (`YYYY-MM-DD`), optionally with a time part.
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

/// Row from the `medical_info` table, one per user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalInfo {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub diabetes: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub hypertension: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub heart_disease: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub asthma: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub allergies: bool,
    /// Free-text notes; empty and absent are treated the same.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Row from the `lifestyle` table, one per user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub smoking: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub alcohol: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub exercise: bool,
}

/// Row from the `emergency_contacts` table; zero or more per user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    #[serde(default)]
    pub name: Option<String>,
    /// Relationship label, e.g. `"Doctor"` or `"Spouse"`.
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_primary: bool,
}

/// An authenticated identity read from the persisted session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Identifier used as the record-store key for every collection.
    pub user_id: String,
    pub email: Option<String>,
    /// Bearer token forwarded to the record store.
    pub access_token: String,
}

/// Decode a nullable boolean column, mapping `null` to `false`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
