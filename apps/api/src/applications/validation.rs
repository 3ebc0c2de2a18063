use chrono::NaiveDate;
use serde::Deserialize;

use crate::applications::store::ApplicationFields;
use crate::models::application::JobStatus;

/// Client payload for creating or replacing an application.
/// Field names match the original JSON wire format.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub applied_date: String,
    pub link: Option<String>,
}

/// Checks a payload against the schema: non-empty company and role, a status
/// from the canonical enumeration (legacy "Interview"/"Offer" labels are
/// accepted and canonicalized), a `YYYY-MM-DD` applied date, and an optional
/// absolute http(s) link. All issues are collected so the client sees them
/// in one response.
pub fn validate_application(payload: &ApplicationPayload) -> Result<ApplicationFields, Vec<String>> {
    let mut issues = Vec::new();

    let company = payload.company.trim();
    if company.is_empty() {
        issues.push("Company name is required".to_string());
    }

    let role = payload.role.trim();
    if role.is_empty() {
        issues.push("Role is required".to_string());
    }

    let status = JobStatus::parse(&payload.status);
    if status.is_none() {
        issues.push("Invalid status value".to_string());
    }

    let applied_date = NaiveDate::parse_from_str(&payload.applied_date, "%Y-%m-%d");
    if applied_date.is_err() {
        issues.push("Applied date must be a valid YYYY-MM-DD date".to_string());
    }

    let link = match payload.link.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(link) if link.starts_with("http://") || link.starts_with("https://") => {
            Some(link.to_string())
        }
        Some(_) => {
            issues.push("Link must be a valid http(s) URL".to_string());
            None
        }
    };

    if !issues.is_empty() {
        return Err(issues);
    }

    // Reaching here means status parsed and the date parsed.
    Ok(ApplicationFields {
        company: company.to_string(),
        role: role.to_string(),
        status: status.map(|s| s.as_str().to_string()).unwrap_or_default(),
        applied_date: applied_date.unwrap_or_default(),
        link,
    })
}
