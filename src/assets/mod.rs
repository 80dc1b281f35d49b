//! Asset store module
//!
//! Virtual filesystem the handler opens Swagger UI assets from.

mod dir;
mod memory;

pub use dir::DirAssetStore;
pub use memory::MemoryAssetStore;

use std::future::Future;
use std::io;
use tokio::io::AsyncRead;

/// Opens named assets for reading
pub trait AssetStore: Send + Sync + 'static {
    type Reader: AsyncRead + Unpin + Send;

    /// Open the asset called `name` (a bare file name such as `swagger-ui.css`)
    fn open(&self, name: &str) -> impl Future<Output = io::Result<Self::Reader>> + Send;
}
