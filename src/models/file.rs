//! Stored file metadata model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata row for a blob in the content-addressed store, keyed by hash
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredFile {
    /// Hex-encoded SHA-256 of the file content
    pub hash: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub uploaded_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}
