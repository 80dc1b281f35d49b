// Server module entry point
// Hosts a Swagger handler under a mount prefix: listener, accept loop, connections and signals

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is renamed
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;

use crate::assets::AssetStore;
use crate::config::{LoggingConfig, Settings};
use crate::handler::SwaggerHandler;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Duration;

/// Shared state of the host server
pub struct ServerState<S> {
    pub handler: Arc<SwaggerHandler<S>>,
    /// Path prefix routed to the handler, always ending in `/`
    pub mount: String,
    pub logging: LoggingConfig,
    pub keep_alive: bool,
    pub connection_timeout: Duration,
    pub max_connections: Option<u64>,
    pub active_connections: AtomicUsize,
}

impl<S: AssetStore> ServerState<S> {
    pub fn new(handler: SwaggerHandler<S>, settings: &Settings) -> Self {
        Self {
            handler: Arc::new(handler),
            mount: normalize_mount(&settings.swagger.mount),
            logging: settings.logging.clone(),
            keep_alive: settings.server.keep_alive,
            connection_timeout: Duration::from_secs(settings.server.connection_timeout),
            max_connections: settings.server.max_connections,
            active_connections: AtomicUsize::new(0),
        }
    }
}

/// Make sure a mount prefix starts and ends with `/`
pub fn normalize_mount(mount: &str) -> String {
    let trimmed = mount.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
