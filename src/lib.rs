pub mod config;
pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod services;

use crate::services::storage::ObjectStorage;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::upload::ingest_upload, handlers::health::health_check,),
    components(
        schemas(
            handlers::upload::UploadEvent,
            handlers::upload::QueryStringParameters,
            handlers::upload::UploadOutcome,
            handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = "upload", description = "Upload ingestion endpoint"),
        (name = "system", description = "Service health")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ObjectStorage>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/upload", post(handlers::upload::ingest_upload))
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}
