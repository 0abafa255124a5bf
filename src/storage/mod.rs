//! Content-addressed blob storage

pub mod blob;

pub use blob::{BlobStore, StoredBlob};
