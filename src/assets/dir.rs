//! Directory-backed asset store
//!
//! Serves assets from a Swagger UI dist directory on disk.

use super::AssetStore;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Asset store rooted at a directory
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` under the root, refusing anything that ends up outside it
    async fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        let root = fs::canonicalize(&self.root).await?;
        let path = fs::canonicalize(root.join(name.trim_start_matches('/'))).await?;
        if !path.starts_with(&root) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("asset path escapes root: {name}"),
            ));
        }
        Ok(path)
    }
}

impl AssetStore for DirAssetStore {
    type Reader = fs::File;

    async fn open(&self, name: &str) -> io::Result<Self::Reader> {
        let path = self.resolve(name).await?;
        fs::File::open(path).await
    }
}
