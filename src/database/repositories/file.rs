//! Stored file metadata repository

use chrono::Utc;
use sqlx::PgPool;

use crate::models::file::StoredFile;
use crate::utils::errors::FairHubError;

#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert the metadata row for a blob, keyed by its content hash
    ///
    /// Re-uploading the same content refreshes the name/MIME metadata but
    /// never produces a second row.
    pub async fn upsert(
        &self,
        hash: &str,
        original_name: &str,
        mime_type: &str,
        size_bytes: i64,
        uploaded_by: Option<i64>,
    ) -> Result<StoredFile, FairHubError> {
        let file = sqlx::query_as::<_, StoredFile>(
            r#"
            INSERT INTO stored_files (hash, original_name, mime_type, size_bytes, uploaded_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (hash) DO UPDATE
            SET original_name = EXCLUDED.original_name,
                mime_type = EXCLUDED.mime_type
            RETURNING hash, original_name, mime_type, size_bytes, uploaded_by, created_at
            "#,
        )
        .bind(hash)
        .bind(original_name)
        .bind(mime_type)
        .bind(size_bytes)
        .bind(uploaded_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(file)
    }

    /// Find file metadata by content hash
    pub async fn find_by_hash(&self, hash: &str) -> Result<Option<StoredFile>, FairHubError> {
        let file = sqlx::query_as::<_, StoredFile>(
            "SELECT hash, original_name, mime_type, size_bytes, uploaded_by, created_at FROM stored_files WHERE hash = $1"
        )
        .bind(hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(file)
    }
}
