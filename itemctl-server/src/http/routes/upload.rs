//! Blob upload endpoints

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    http::StatusCode,
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;

use crate::blob::ObjectKey;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::ValidationError;

/// Multipart field carrying the uploaded file
const FILE_FIELD: &str = "file";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
const DEMO_PAYLOAD: &[u8] = b"Hello from itemctl! This object was written by POST /upload.\n";

const DEMO_UPLOAD_ERROR: &str = "Error uploading to S3";
const FILE_UPLOAD_ERROR: &str = "Error uploading file";
const UPLOADED: &str = "File uploaded successfully";

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub key: String,
}

impl UploadResponse {
    fn created(key: ObjectKey) -> (StatusCode, Json<Self>) {
        (
            StatusCode::CREATED,
            Json(Self {
                message: UPLOADED,
                key: key.into_string(),
            }),
        )
    }
}

/// The `file` part of a multipart body
struct FilePart {
    filename: String,
    content_type: String,
    body: Bytes,
}

/// POST /upload - write a fixed demonstration object
async fn upload_demo(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let blobs = state.blob_store()?;
    let key = ObjectKey::timestamped(Utc::now(), "txt");

    blobs
        .put(&key, Bytes::from_static(DEMO_PAYLOAD), "text/plain")
        .await
        .map_err(|e| ApiError::blob(DEMO_UPLOAD_ERROR, e))?;

    tracing::info!(bucket = %blobs.bucket(), %key, "Demo object uploaded");
    Ok(UploadResponse::created(key))
}

/// POST /upload-file - forward the `file` part to the blob store
async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let mut multipart = multipart?;
    let file = read_file_part(&mut multipart)
        .await?
        .ok_or(ValidationError::MissingFile { field: FILE_FIELD })?;

    let blobs = state.blob_store()?;
    let key = ObjectKey::for_upload(Utc::now(), Some(file.filename.as_str()));
    let size = file.body.len();

    blobs
        .put(&key, file.body, &file.content_type)
        .await
        .map_err(|e| ApiError::blob(FILE_UPLOAD_ERROR, e))?;

    tracing::info!(
        bucket = %blobs.bucket(),
        %key,
        size,
        content_type = %file.content_type,
        "File uploaded"
    );
    Ok(UploadResponse::created(key))
}

/// Find the first file part named `file`. Other parts are skipped, as are
/// `file` parts sent as plain form values without a filename.
async fn read_file_part(multipart: &mut Multipart) -> Result<Option<FilePart>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_owned();
        let body = field.bytes().await?;

        return Ok(Some(FilePart {
            filename,
            content_type,
            body,
        }));
    }
    Ok(None)
}

/// Upload routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload", post(upload_demo))
        .route("/upload-file", post(upload_file))
}
