use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::analytics::models::JobRecord;

/// Canonical status enumeration. The store persists these exact labels; the
/// legacy presentation labels "Interview"/"Offer" are accepted at the
/// validation boundary and canonicalized on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Applied,
    Interviewing,
    Offered,
    Rejected,
}

impl JobStatus {
    pub fn parse(label: &str) -> Option<JobStatus> {
        match label {
            "Applied" => Some(JobStatus::Applied),
            "Interviewing" | "Interview" => Some(JobStatus::Interviewing),
            "Offered" | "Offer" => Some(JobStatus::Offered),
            "Rejected" => Some(JobStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offered => "Offered",
            JobStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub status: String,
    pub applied_date: NaiveDate,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApplicationRow {
    /// Strips the id, link, and timestamps; analytics only looks at the four
    /// core fields, with the date rendered back to `YYYY-MM-DD`.
    pub fn to_job_record(&self) -> JobRecord {
        JobRecord {
            company: self.company.clone(),
            role: self.role.clone(),
            applied_date: self.applied_date.format("%Y-%m-%d").to_string(),
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_labels() {
        assert_eq!(JobStatus::parse("Applied"), Some(JobStatus::Applied));
        assert_eq!(JobStatus::parse("Interviewing"), Some(JobStatus::Interviewing));
        assert_eq!(JobStatus::parse("Offered"), Some(JobStatus::Offered));
        assert_eq!(JobStatus::parse("Rejected"), Some(JobStatus::Rejected));
    }

    #[test]
    fn test_parse_legacy_presentation_labels() {
        assert_eq!(JobStatus::parse("Interview"), Some(JobStatus::Interviewing));
        assert_eq!(JobStatus::parse("Offer"), Some(JobStatus::Offered));
    }

    #[test]
    fn test_parse_rejects_unknown_and_wrong_case() {
        assert_eq!(JobStatus::parse("applied"), None);
        assert_eq!(JobStatus::parse("Ghosted"), None);
    }

    #[test]
    fn test_row_maps_to_record() {
        let row = ApplicationRow {
            id: Uuid::new_v4(),
            company: "Google".to_string(),
            role: "SDE Intern".to_string(),
            status: "Applied".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            link: Some("https://careers.google.com".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let record = row.to_job_record();
        assert_eq!(record.applied_date, "2025-04-01");
        assert_eq!(record.company, "Google");
        assert_eq!(record.status, "Applied");
    }
}
