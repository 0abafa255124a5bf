//! Content-addressed blob store
//!
//! Blobs live under `<root>/<h[0..2]>/<h[2..4]>/<hash>` where `h` is the
//! hex-encoded SHA-256 of the content. A `<hash>.json` sidecar next to the
//! blob records the original filename, MIME type, and size.
//!
//! Writes go to a temp file first and are then renamed into place. The
//! rename is atomic on a single filesystem, so two concurrent uploads of the
//! same content cannot corrupt each other; the loser replaces identical
//! bytes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::fs;
use uuid::Uuid;

use crate::utils::errors::{FairHubError, Result};

/// Outcome of storing a blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredBlob {
    /// Hex-encoded SHA-256 of the content
    pub hash: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// True when the blob already existed and no bytes were written
    pub deduplicated: bool,
}

/// Sidecar metadata written next to each blob
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BlobSidecar {
    original_name: String,
    mime_type: String,
    size_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Compute the hex SHA-256 of a buffer
    pub fn content_hash(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        hex::encode(hasher.finalize())
    }

    /// Path of the blob for a given hash
    pub fn blob_path(&self, hash: &str) -> PathBuf {
        self.root.join(&hash[0..2]).join(&hash[2..4]).join(hash)
    }

    fn sidecar_path(&self, hash: &str) -> PathBuf {
        let mut path = self.blob_path(hash);
        path.set_extension("json");
        path
    }

    /// Store a buffer under its content hash
    ///
    /// Idempotent: storing the same content again returns the same hash
    /// without rewriting the blob.
    pub async fn store(
        &self,
        bytes: &[u8],
        original_name: &str,
        mime_type: &str,
    ) -> Result<StoredBlob> {
        let hash = Self::content_hash(bytes);
        validate_hash(&hash)?;

        let final_path = self.blob_path(&hash);
        let dir = final_path
            .parent()
            .ok_or_else(|| FairHubError::InvalidInput("blob path has no parent".to_string()))?;
        fs::create_dir_all(dir).await?;

        let deduplicated = fs::try_exists(&final_path).await?;
        if !deduplicated {
            // Hash-named temp file in the target directory keeps the rename
            // on one filesystem.
            let tmp_path = dir.join(format!(".{}.{}.tmp", hash, Uuid::new_v4()));
            fs::write(&tmp_path, bytes).await?;
            if let Err(e) = fs::rename(&tmp_path, &final_path).await {
                let _ = fs::remove_file(&tmp_path).await;
                return Err(e.into());
            }
        }

        let sidecar = BlobSidecar {
            original_name: original_name.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes: bytes.len() as u64,
        };
        // Same temp-then-rename as the blob, so a concurrent writer can
        // never leave a torn sidecar behind.
        let sidecar_tmp = dir.join(format!(".{}.{}.json.tmp", hash, Uuid::new_v4()));
        fs::write(&sidecar_tmp, serde_json::to_vec_pretty(&sidecar)?).await?;
        if let Err(e) = fs::rename(&sidecar_tmp, self.sidecar_path(&hash)).await {
            let _ = fs::remove_file(&sidecar_tmp).await;
            return Err(e.into());
        }

        crate::utils::logging::log_blob_operation(
            &hash,
            if deduplicated { "dedup" } else { "store" },
            bytes.len() as u64,
        );

        Ok(StoredBlob {
            hash,
            original_name: sidecar.original_name,
            mime_type: sidecar.mime_type,
            size_bytes: sidecar.size_bytes,
            deduplicated,
        })
    }

    /// Read a blob's bytes by hash
    pub async fn read(&self, hash: &str) -> Result<Option<Vec<u8>>> {
        validate_hash(hash)?;
        let path = self.blob_path(hash);
        if !fs::try_exists(&path).await? {
            return Ok(None);
        }
        Ok(Some(fs::read(&path).await?))
    }

    /// Check whether a blob exists
    pub async fn exists(&self, hash: &str) -> Result<bool> {
        validate_hash(hash)?;
        Ok(fs::try_exists(self.blob_path(hash)).await?)
    }
}

/// Reject anything that is not a lowercase hex SHA-256
///
/// The hash doubles as a path component, so this also closes off path
/// traversal through the download route.
fn validate_hash(hash: &str) -> Result<()> {
    if hash.len() != 64 || !hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()) {
        return Err(FairHubError::InvalidInput(format!(
            "Invalid content hash: {}",
            hash
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_is_stable() {
        let a = BlobStore::content_hash(b"hello");
        let b = BlobStore::content_hash(b"hello");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, BlobStore::content_hash(b"hello!"));
    }

    #[test]
    fn test_blob_path_uses_two_level_prefix() {
        let store = BlobStore::new("/data/blobs");
        let hash = BlobStore::content_hash(b"x");
        let path = store.blob_path(&hash);
        let rel = path.strip_prefix("/data/blobs").unwrap();
        let parts: Vec<_> = rel.components().collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(rel.components().next().unwrap().as_os_str().len(), 2);
    }

    #[test]
    fn test_validate_hash_rejects_traversal() {
        assert!(validate_hash("../../etc/passwd").is_err());
        assert!(validate_hash("abc").is_err());
        let ok = BlobStore::content_hash(b"ok");
        assert!(validate_hash(&ok).is_ok());
    }
}
