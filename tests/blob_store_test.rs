//! Blob store integration tests
//!
//! These run against a temporary directory and exercise the full
//! store/read/dedup path.

mod helpers;

use helpers::BlobTestContext;

#[tokio::test]
async fn test_store_and_read_round_trip() {
    let ctx = BlobTestContext::new().expect("Failed to create test context");

    let stored = ctx
        .store
        .store(b"resume body", "resume.pdf", "application/pdf")
        .await
        .expect("store failed");

    assert_eq!(stored.size_bytes, 11);
    assert_eq!(stored.original_name, "resume.pdf");
    assert!(!stored.deduplicated);

    let bytes = ctx
        .store
        .read(&stored.hash)
        .await
        .expect("read failed")
        .expect("blob missing");
    assert_eq!(bytes, b"resume body");
}

#[tokio::test]
async fn test_same_content_deduplicates() {
    let ctx = BlobTestContext::new().expect("Failed to create test context");

    let first = ctx
        .store
        .store(b"identical bytes", "a.txt", "text/plain")
        .await
        .expect("first store failed");
    let second = ctx
        .store
        .store(b"identical bytes", "b.txt", "text/plain")
        .await
        .expect("second store failed");

    // Same content yields the same hash and no second blob
    assert_eq!(first.hash, second.hash);
    assert!(!first.deduplicated);
    assert!(second.deduplicated);

    // Only the one blob and its sidecar exist under the prefix directories
    let blob_path = ctx.store.blob_path(&first.hash);
    let entries = std::fs::read_dir(blob_path.parent().unwrap())
        .unwrap()
        .count();
    assert_eq!(entries, 2);
}

#[tokio::test]
async fn test_blob_lands_under_two_level_prefix() {
    let ctx = BlobTestContext::new().expect("Failed to create test context");

    let stored = ctx
        .store
        .store(b"layout check", "x.bin", "application/octet-stream")
        .await
        .expect("store failed");

    let expected = ctx
        .temp_dir
        .path()
        .join(&stored.hash[0..2])
        .join(&stored.hash[2..4])
        .join(&stored.hash);
    assert!(expected.is_file());

    let sidecar = expected.with_extension("json");
    assert!(sidecar.is_file());

    let sidecar_text = std::fs::read_to_string(sidecar).unwrap();
    let sidecar_json: serde_json::Value = serde_json::from_str(&sidecar_text).unwrap();
    assert_eq!(sidecar_json["original_name"], "x.bin");
    assert_eq!(sidecar_json["size_bytes"], 12);
}

#[tokio::test]
async fn test_read_unknown_hash_returns_none() {
    let ctx = BlobTestContext::new().expect("Failed to create test context");

    let missing = fairhub::BlobStore::content_hash(b"never stored");
    let result = ctx.store.read(&missing).await.expect("read failed");
    assert!(result.is_none());
    assert!(!ctx.store.exists(&missing).await.expect("exists failed"));
}

#[tokio::test]
async fn test_malformed_hash_rejected() {
    let ctx = BlobTestContext::new().expect("Failed to create test context");

    assert!(ctx.store.read("../../etc/passwd").await.is_err());
    assert!(ctx.store.read("deadbeef").await.is_err());
}

#[tokio::test]
async fn test_concurrent_stores_of_same_content() {
    let ctx = BlobTestContext::new().expect("Failed to create test context");
    let store = ctx.store.clone();

    // Distinct original names exercise the sidecar writes as well
    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .store(b"raced content", &format!("r{}.txt", i), "text/plain")
                    .await
            })
        })
        .collect();

    let mut hashes = Vec::new();
    for result in futures::future::join_all(tasks).await {
        let stored = result.unwrap().expect("store failed");
        hashes.push(stored.hash);
    }

    hashes.dedup();
    assert_eq!(hashes.len(), 1);

    let bytes = ctx
        .store
        .read(&hashes[0])
        .await
        .expect("read failed")
        .expect("blob missing");
    assert_eq!(bytes, b"raced content");

    // Whoever lost the race, the sidecar is complete JSON from one writer
    let sidecar_path = ctx.store.blob_path(&hashes[0]).with_extension("json");
    let sidecar: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(sidecar_path).unwrap()).unwrap();
    assert_eq!(sidecar["size_bytes"], 13);
    assert!(sidecar["original_name"]
        .as_str()
        .unwrap()
        .starts_with('r'));

    // No temp files left behind
    let leftovers = std::fs::read_dir(ctx.store.blob_path(&hashes[0]).parent().unwrap())
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .file_name()
                .to_string_lossy()
                .ends_with(".tmp")
        })
        .count();
    assert_eq!(leftovers, 0);
}
