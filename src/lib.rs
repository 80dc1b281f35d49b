//! Swagger UI request handler for hyper servers
//!
//! Serves the Swagger UI page, its assets and a registered API description
//! under whatever path prefix the handler is mounted at.
//!
//! ```no_run
//! use swagger_handler::assets::DirAssetStore;
//! use swagger_handler::config::{options, DocExpansion};
//! use swagger_handler::handler::wrap_handler;
//! use swagger_handler::registry::DocumentRegistry;
//!
//! DocumentRegistry::global()
//!     .register("swagger", r#"{"openapi":"3.0.0"}"#)
//!     .unwrap();
//! let handler = wrap_handler(
//!     DirAssetStore::new("static/swagger-ui"),
//!     [options::doc_expansion(DocExpansion::None), options::deep_linking(false)],
//! );
//! // hand `handler.handle(req)` to a hyper `service_fn`
//! # let _ = handler;
//! ```

pub mod assets;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod registry;
pub mod server;

pub use assets::{AssetStore, DirAssetStore, MemoryAssetStore};
pub use config::{options, ConfigOption, DocExpansion, SwaggerConfig};
pub use handler::{custom_wrap_handler, wrap_handler, DispatchError, SwaggerHandler};
pub use registry::{ApiDoc, DocumentRegistry, RegistryError};
