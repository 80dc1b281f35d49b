//! In-memory asset store

use super::AssetStore;
use hyper::body::Bytes;
use std::collections::HashMap;
use std::io::{self, Cursor};

/// Asset store backed by a name-to-bytes map
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    files: HashMap<String, Bytes>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an asset
    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        self.insert(name, content);
        self
    }

    /// Add (or replace) an asset in place
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Bytes>) {
        self.files.insert(name.into(), content.into());
    }

    pub fn get(&self, name: &str) -> Option<&Bytes> {
        self.files.get(name)
    }
}

impl AssetStore for MemoryAssetStore {
    type Reader = Cursor<Bytes>;

    async fn open(&self, name: &str) -> io::Result<Self::Reader> {
        self.files.get(name).cloned().map(Cursor::new).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("asset not found: {name}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_open_existing() {
        let store = MemoryAssetStore::new().with_file("swagger-ui.css", "body{}");
        let mut reader = store.open("swagger-ui.css").await.unwrap();
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await.unwrap();
        assert_eq!(buf, b"body{}");
    }

    #[test]
    fn test_insert_replaces() {
        let mut store = MemoryAssetStore::new().with_file("swagger-ui.js", "v1");
        store.insert("swagger-ui.js", "v2");
        assert_eq!(store.get("swagger-ui.js"), Some(&Bytes::from_static(b"v2")));
        assert_eq!(store.get("swagger-ui.css"), None);
    }

    #[tokio::test]
    async fn test_open_missing() {
        let store = MemoryAssetStore::new();
        let err = store.open("swagger-ui.css").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
