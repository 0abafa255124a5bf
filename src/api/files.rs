//! File procedures: content-addressed upload and retrieval

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::api::{ApiResult, AppState};
use crate::middleware::AuthUser;
use crate::utils::errors::FairHubError;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub hash: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// Whether the content was already present
    pub deduplicated: bool,
    pub url: String,
}

/// `files.upload`: multipart POST with one file field
pub async fn upload(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| FairHubError::InvalidInput(format!("Malformed multipart body: {}", e)))?
        .ok_or_else(|| {
            FairHubError::InvalidInput("Multipart body contains no file".to_string())
        })?;

    let original_name = field
        .file_name()
        .unwrap_or("unnamed")
        .to_string();
    let mime_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let bytes = field
        .bytes()
        .await
        .map_err(|e| FairHubError::InvalidInput(format!("Failed to read upload: {}", e)))?;

    if bytes.is_empty() {
        return Err(FairHubError::InvalidInput("Uploaded file is empty".to_string()).into());
    }
    if bytes.len() as u64 > state.settings.storage.max_upload_bytes {
        return Err(FairHubError::InvalidInput(format!(
            "Upload exceeds the {} byte limit",
            state.settings.storage.max_upload_bytes
        ))
        .into());
    }

    let stored = state
        .services
        .blob_store
        .store(&bytes, &original_name, &mime_type)
        .await?;

    state
        .services
        .db
        .files
        .upsert(
            &stored.hash,
            &stored.original_name,
            &stored.mime_type,
            stored.size_bytes as i64,
            Some(user.id),
        )
        .await?;

    let url = format!("/api/files/download/{}", stored.hash);
    Ok(Json(UploadResponse {
        hash: stored.hash,
        original_name: stored.original_name,
        mime_type: stored.mime_type,
        size_bytes: stored.size_bytes,
        deduplicated: stored.deduplicated,
        url,
    }))
}

/// `files.download`: stream a blob by content hash
pub async fn download(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(hash): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let metadata = state
        .services
        .db
        .files
        .find_by_hash(&hash)
        .await?
        .ok_or_else(|| FairHubError::NotFound(format!("No file with hash {}", hash)))?;

    let bytes = state
        .services
        .blob_store
        .read(&hash)
        .await?
        .ok_or_else(|| FairHubError::NotFound(format!("No blob with hash {}", hash)))?;

    Ok((
        [
            (header::CONTENT_TYPE, metadata.mime_type),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", metadata.original_name.replace('"', "")),
            ),
        ],
        bytes,
    ))
}
