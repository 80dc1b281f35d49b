//! Swagger UI request handler module
//!
//! One handler instance serves the UI page, the registered API document and
//! the UI assets under whatever prefix the host mounts it at.

pub mod error;
pub mod resource;
pub mod router;
pub mod template;

pub use error::DispatchError;
pub use resource::{match_resource, Resource};

use crate::assets::AssetStore;
use crate::config::{ConfigOption, SwaggerConfig, DEFAULT_INSTANCE_NAME, DEFAULT_TITLE};
use crate::registry::DocumentRegistry;
use std::sync::{Arc, OnceLock};

/// Mountable Swagger UI handler
///
/// Share it between connections as `Arc<SwaggerHandler<S>>`.
pub struct SwaggerHandler<S> {
    config: SwaggerConfig,
    store: S,
    registry: Arc<DocumentRegistry>,
    /// Prefix captured from the first matched request
    route_prefix: OnceLock<String>,
}

/// Build a handler from the default configuration overridden by `options`
pub fn wrap_handler<S: AssetStore>(
    store: S,
    options: impl IntoIterator<Item = ConfigOption>,
) -> SwaggerHandler<S> {
    custom_wrap_handler(SwaggerConfig::with_options(options), store)
}

/// Build a handler from an explicit configuration record
///
/// An empty instance name or title falls back to its default.
pub fn custom_wrap_handler<S: AssetStore>(
    mut config: SwaggerConfig,
    store: S,
) -> SwaggerHandler<S> {
    if config.instance_name.is_empty() {
        config.instance_name = DEFAULT_INSTANCE_NAME.to_string();
    }
    if config.title.is_empty() {
        config.title = DEFAULT_TITLE.to_string();
    }

    SwaggerHandler {
        config,
        store,
        registry: DocumentRegistry::global(),
        route_prefix: OnceLock::new(),
    }
}

impl<S> SwaggerHandler<S> {
    /// Look documents up in `registry` instead of the process-wide one
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<DocumentRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Configuration the page is rendered with
    pub const fn config(&self) -> &SwaggerConfig {
        &self.config
    }

    /// Store assets are read from
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Registry the document is looked up in
    pub fn registry(&self) -> &Arc<DocumentRegistry> {
        &self.registry
    }

    /// Route prefix, once a request has matched
    pub fn route_prefix(&self) -> Option<&str> {
        self.route_prefix.get().map(String::as_str)
    }
}
