use std::sync::Arc;

use swagger_handler::assets::DirAssetStore;
use swagger_handler::config::Settings;
use swagger_handler::handler::custom_wrap_handler;
use swagger_handler::logger;
use swagger_handler::registry::DocumentRegistry;
use swagger_handler::server::{self, ServerState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "swagger".to_string());
    let settings = Settings::load_from(&config_path)?;
    logger::init(&settings.logging)?;

    // Build the Tokio runtime, sizing the worker pool from config
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = settings.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(settings))
}

async fn async_main(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let addr = settings.get_socket_addr()?;

    let store = DirAssetStore::new(&settings.swagger.assets_dir);
    let handler = custom_wrap_handler(settings.swagger.ui.clone(), store);

    if let Some(path) = settings.swagger.document_path.as_deref() {
        register_document(path, &handler.config().instance_name).await?;
    } else {
        logger::log_info("No document_path configured, doc.json answers 500 until one is registered");
    }
    let state = Arc::new(ServerState::new(handler, &settings));

    let listener = server::create_reusable_listener(addr)?;
    logger::log_server_start(&addr, &settings);

    server::start_server_loop(listener, state, server::signal::shutdown_signal()).await?;
    Ok(())
}

/// Read an API description from disk and register it under `instance_name`
async fn register_document(
    path: &str,
    instance_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read document '{path}': {e}"))?;
    let size = doc.len();

    DocumentRegistry::global().register(instance_name, doc)?;
    logger::log_document_registered(instance_name, path, size);
    Ok(())
}
