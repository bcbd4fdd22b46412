use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::Transcriber;
use crate::domain::{ProjectId, UserId};
use crate::presentation::state::AppState;

use super::process_project::USER_ID_HEADER;

#[derive(Serialize)]
pub struct ProjectStatusResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub progress: u8,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, headers))]
pub async fn project_status_handler<T>(
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
        .project_repository
        .get_project(ProjectId::from_uuid(project_uuid), user_id)
        .await
    {
        Ok(Some(project)) => {
            let response = ProjectStatusResponse {
                id: project.id.as_uuid().to_string(),
                name: project.name,
                description: project.description,
                status: project.status.as_str().to_string(),
                progress: project.progress,
                created_at: project.created_at.to_rfc3339(),
                updated_at: project.updated_at.to_rfc3339(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Project not found: {}", project_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch project");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch project: {}", e),
                }),
            )
                .into_response()
        }
    }
}
