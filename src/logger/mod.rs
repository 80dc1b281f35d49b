//! Logger module
//!
//! Logging utilities for the host server:
//! - Server lifecycle logging
//! - Access logging in `combined`, `common` or `json` format
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{LoggingConfig, Settings};
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(
        config.access_log_file.as_deref(),
        config.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, settings: &Settings) {
    write_info("======================================");
    write_info("Swagger server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Swagger UI: http://{addr}{}index.html",
        settings.swagger.mount
    ));
    write_info(&format!("Assets: {}", settings.swagger.assets_dir));
    if let Some(workers) = settings.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = settings.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = settings.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_info(message: &str) {
    write_info(&format!("[INFO] {message}"));
}

pub fn log_document_registered(name: &str, path: &str, size: usize) {
    write_info(&format!(
        "[Registry] Registered '{name}' from {path} ({size} bytes)"
    ));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_shutdown(reason: &str) {
    write_info(&format!("\n[Shutdown] {reason}, stopping accept loop"));
}
