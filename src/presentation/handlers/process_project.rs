use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::Transcriber;
use crate::application::services::ProcessingError;
use crate::domain::{ProjectId, UserId};
use crate::presentation::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Serialize)]
pub struct ProcessProjectResponse {
    pub message: String,
    pub total_files: usize,
    pub processed_files: usize,
    pub status: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Kicks off a full processing run for one project. Token verification
/// happens upstream; the verified caller arrives as `x-user-id`.
#[tracing::instrument(skip(state, headers))]
pub async fn process_project_handler<T>(
    State(state): State<AppState<T>>,
    Path(project_id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    T: Transcriber + 'static,
{
    let project_uuid = match Uuid::parse_str(&project_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid project ID: {}", project_id),
                }),
            )
                .into_response();
        }
    };

    let user_id = match headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
    {
        Some(u) => UserId::from_uuid(u),
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Missing or invalid {} header", USER_ID_HEADER),
                }),
            )
                .into_response();
        }
    };

    match state
        .processing_service
        .run(ProjectId::from_uuid(project_uuid), user_id)
        .await
    {
        Ok(summary) => (
            StatusCode::OK,
            Json(ProcessProjectResponse {
                message: "Processing completed".to_string(),
                total_files: summary.total_files,
                processed_files: summary.processed_files,
                status: summary.status.as_str().to_string(),
            }),
        )
            .into_response(),
        Err(ProcessingError::ProjectNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Project not found: {}", project_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Project processing run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
