// Configuration module entry point
// Swagger UI configuration record, its option functions, and host settings

pub mod options;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use options::ConfigOption;
pub use types::{
    DocExpansion, LoggingConfig, MountSettings, ServerSettings, Settings, SwaggerConfig,
    DEFAULT_INSTANCE_NAME, DEFAULT_TITLE,
};

impl Settings {
    /// Load settings from specified file path (without extension)
    /// Default settings file is "swagger.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SWAGGER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.keep_alive", true)?
            .set_default("server.connection_timeout", 30)?
            .set_default("swagger.mount", "/swagger/")?
            .set_default("swagger.assets_dir", "static/swagger-ui")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("swagger")
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_without_file() {
        let settings = Settings::load_from("does-not-exist/swagger").unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.swagger.mount, "/swagger/");
        assert_eq!(settings.swagger.ui, SwaggerConfig::default());
        assert!(settings.logging.access_log);
        assert_eq!(
            settings.get_socket_addr().unwrap(),
            "127.0.0.1:8080".parse().unwrap()
        );
    }
}
