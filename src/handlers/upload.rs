use crate::AppState;
use crate::error::IngestError;
use crate::services::storage::ObjectStorage;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Key used when the caller does not name the object
pub const DEFAULT_OBJECT_KEY: &str = "default-file.txt";

const FAILURE_MESSAGE: &str = "Error uploading file.";

/// Inbound event, shaped like an HTTP trigger payload
#[derive(Deserialize, ToSchema)]
pub struct UploadEvent {
    /// Base64-encoded file content
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default, rename = "queryStringParameters")]
    pub query_string_parameters: Option<QueryStringParameters>,
}

#[derive(Deserialize, Default, ToSchema)]
pub struct QueryStringParameters {
    #[serde(default)]
    pub filename: Option<String>,
}

impl UploadEvent {
    fn filename(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|q| q.filename.as_deref())
    }
}

/// Normalized result: 200 with a message naming the stored object, or the
/// opaque 500
#[derive(Serialize, ToSchema)]
pub struct UploadOutcome {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl UploadOutcome {
    fn success(key: &str) -> Self {
        Self {
            status_code: 200,
            body: format!("File {key} uploaded successfully!"),
        }
    }

    fn failure() -> Self {
        Self {
            status_code: 500,
            body: FAILURE_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for UploadOutcome {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

fn decode_body(body: Option<&str>) -> Result<Vec<u8>, IngestError> {
    let encoded = body.ok_or(IngestError::EmptyBody)?;
    Ok(STANDARD.decode(encoded)?)
}

/// Caller-supplied names are taken as-is beyond the non-empty check; there is
/// no path-traversal or collision guard on keys.
fn resolve_key(filename: Option<&str>) -> String {
    match filename {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_OBJECT_KEY.to_string(),
    }
}

async fn ingest(store: &dyn ObjectStorage, event: &UploadEvent) -> Result<String, IngestError> {
    let data = decode_body(event.body.as_deref())?;
    let key = resolve_key(event.filename());
    store
        .put_object(&key, data)
        .await
        .map_err(IngestError::Backend)?;
    Ok(key)
}

/// Run the decode → resolve → store pipeline and collapse any error into the
/// fixed 500 outcome. Error detail goes to the log only; the caller never
/// learns the cause.
pub async fn handle_event(store: &dyn ObjectStorage, event: &UploadEvent) -> UploadOutcome {
    match ingest(store, event).await {
        Ok(key) => {
            tracing::info!(key = %key, "object stored");
            UploadOutcome::success(&key)
        }
        Err(e) => {
            tracing::error!(error = ?e, "upload ingestion failed");
            UploadOutcome::failure()
        }
    }
}

#[utoipa::path(
    post,
    path = "/upload",
    request_body = UploadEvent,
    responses(
        (status = 200, description = "File uploaded successfully", body = UploadOutcome),
        (status = 500, description = "Upload failed", body = UploadOutcome)
    ),
    tag = "upload"
)]
pub async fn ingest_upload(
    State(state): State<AppState>,
    Json(event): Json<UploadEvent>,
) -> UploadOutcome {
    handle_event(state.storage.as_ref(), &event).await
}
