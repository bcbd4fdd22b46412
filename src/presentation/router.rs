use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::Transcriber;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, process_project_handler, project_status_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<T>(state: AppState<T>) -> Router
where
    T: Transcriber + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/projects/{project_id}",
            get(project_status_handler::<T>),
        )
        .route(
            "/api/v1/projects/{project_id}/process",
            post(process_project_handler::<T>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
