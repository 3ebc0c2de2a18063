use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One tracked job application as the analytics functions see it.
/// Persisted rows carry an id and timestamps on top of this; callers strip
/// those before handing records in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub company: String,
    pub role: String,
    /// Calendar date the application was submitted, `YYYY-MM-DD`.
    pub applied_date: String,
    /// Free-form status label. The analytics functions count whatever is
    /// here verbatim; validation of the enumeration happens at the API
    /// boundary, not in this module.
    pub status: String,
}

/// A first-seen/later-seen pair of records sharing an identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatePair {
    pub original: JobRecord,
    pub duplicate: JobRecord,
}

/// Status label -> number of records carrying that exact label.
pub type FrequencyMap = HashMap<String, u64>;

/// A record whose `applied_date` could not be parsed as `YYYY-MM-DD`.
/// Carries the record's position and identifying fields so the caller can
/// point at the offending entry; never handled inside this module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {index} ({company} / {role}) has unparseable applied date '{value}'")]
pub struct InvalidDateError {
    pub index: usize,
    pub company: String,
    pub role: String,
    pub value: String,
}
