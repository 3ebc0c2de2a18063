use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::applications::store::{
    delete_application, insert_application, list_applications, update_application,
};
use crate::applications::validation::{validate_application, ApplicationPayload};
use crate::errors::AppError;
use crate::models::application::ApplicationRow;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/v1/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(payload): Json<ApplicationPayload>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    let fields = validate_application(&payload).map_err(|issues| {
        AppError::Validation(issues.join(", "))
    })?;

    let row = insert_application(&state.db, &fields).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let rows = list_applications(&state.db).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound("No job applications found".to_string()));
    }
    Ok(Json(rows))
}

/// PUT /api/v1/applications/:id
pub async fn handle_update_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ApplicationPayload>,
) -> Result<Json<ApplicationRow>, AppError> {
    let fields = validate_application(&payload).map_err(|issues| {
        AppError::Validation(issues.join(", "))
    })?;

    let row = update_application(&state.db, id, &fields)
        .await?
        .ok_or_else(|| AppError::NotFound("Job application not found".to_string()))?;
    Ok(Json(row))
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    if !delete_application(&state.db, id).await? {
        return Err(AppError::NotFound("Job application not found".to_string()));
    }
    Ok(Json(MessageResponse {
        message: "Job application deleted successfully".to_string(),
    }))
}
