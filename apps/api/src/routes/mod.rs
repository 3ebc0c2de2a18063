pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::applications::handlers as applications;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Application CRUD
        .route(
            "/api/v1/applications",
            post(applications::handle_create_application)
                .get(applications::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id",
            put(applications::handle_update_application)
                .delete(applications::handle_delete_application),
        )
        // Analytics views over the same records
        .route("/api/v1/analytics/sorted", get(analytics::handle_sorted))
        .route(
            "/api/v1/analytics/status-frequency",
            get(analytics::handle_status_frequency),
        )
        .route(
            "/api/v1/analytics/duplicates",
            get(analytics::handle_duplicates),
        )
        .with_state(state)
}
