use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::analytics::dedup::find_duplicate_applications;
use crate::analytics::frequency::count_status_frequency;
use crate::analytics::models::{DuplicatePair, FrequencyMap, JobRecord};
use crate::analytics::sample::sample_jobs;
use crate::analytics::sorting::sort_by_applied_date;
use crate::applications::store::list_applications;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse<T: Serialize> {
    /// True when the store was empty and the sample dataset was analyzed
    /// instead.
    pub sample_data: bool,
    pub result: T,
}

/// Loads every stored application as an analytics record, falling back to
/// the sample dataset when the store is empty. The fallback lives here, at
/// the call site; the analytics functions only ever see what they are given.
async fn load_records(state: &AppState) -> Result<(bool, Vec<JobRecord>), AppError> {
    let rows = list_applications(&state.db).await?;
    if rows.is_empty() {
        info!("No stored applications; analyzing the sample dataset");
        return Ok((true, sample_jobs()));
    }
    Ok((false, rows.iter().map(|r| r.to_job_record()).collect()))
}

/// GET /api/v1/analytics/sorted
pub async fn handle_sorted(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse<Vec<JobRecord>>>, AppError> {
    let (sample_data, records) = load_records(&state).await?;
    let result = sort_by_applied_date(&records)?;
    Ok(Json(AnalyticsResponse {
        sample_data,
        result,
    }))
}

/// GET /api/v1/analytics/status-frequency
pub async fn handle_status_frequency(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse<FrequencyMap>>, AppError> {
    let (sample_data, records) = load_records(&state).await?;
    Ok(Json(AnalyticsResponse {
        sample_data,
        result: count_status_frequency(&records),
    }))
}

/// GET /api/v1/analytics/duplicates
pub async fn handle_duplicates(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse<Vec<DuplicatePair>>>, AppError> {
    let (sample_data, records) = load_records(&state).await?;
    Ok(Json(AnalyticsResponse {
        sample_data,
        result: find_duplicate_applications(&records),
    }))
}
