// Configuration types module
// Defines the Swagger UI configuration record and the host server settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default instance name that generated documents register under
pub const DEFAULT_INSTANCE_NAME: &str = "swagger";

/// Default page title of the UI
pub const DEFAULT_TITLE: &str = "Swagger UI";

/// Swagger UI configuration record
///
/// Built once per mounted handler and never mutated afterwards.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SwaggerConfig {
    /// URL pointing to the API definition, relative to the UI page
    pub url: String,
    pub doc_expansion: DocExpansion,
    /// Registry key of the served document
    pub instance_name: String,
    pub title: String,
    /// -1 hides the models section entirely
    pub default_models_expand_depth: i32,
    pub deep_linking: bool,
    /// Keep authorization data across browser close/refresh
    pub persist_authorization: bool,
    pub oauth2_default_client_id: String,
    pub syntax_highlight: bool,
}

impl Default for SwaggerConfig {
    fn default() -> Self {
        Self {
            url: "doc.json".to_string(),
            doc_expansion: DocExpansion::List,
            instance_name: DEFAULT_INSTANCE_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            default_models_expand_depth: 1,
            deep_linking: true,
            persist_authorization: false,
            oauth2_default_client_id: String::new(),
            syntax_highlight: false,
        }
    }
}

/// Initial expansion state of operations and tags in the UI
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocExpansion {
    /// Expand only the tags
    #[default]
    List,
    /// Expand tags and operations
    Full,
    /// Expand nothing
    None,
}

impl DocExpansion {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Full => "full",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DocExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocExpansion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "full" => Ok(Self::Full),
            "none" => Ok(Self::None),
            other => Err(format!(
                "Invalid doc expansion '{other}', expected list, full or none"
            )),
        }
    }
}

/// Host server settings, loaded from file and environment
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub swagger: MountSettings,
    pub logging: LoggingConfig,
}

/// Listener and runtime settings
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub keep_alive: bool,
    /// Per-connection timeout in seconds
    pub connection_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Where and what the Swagger handler serves
#[derive(Debug, Deserialize, Clone)]
pub struct MountSettings {
    /// Path prefix the handler is mounted under, e.g. `/swagger/`
    pub mount: String,
    /// Directory holding the Swagger UI dist files
    pub assets_dir: String,
    /// API description file registered under `ui.instance_name` at startup
    #[serde(default)]
    pub document_path: Option<String>,
    #[serde(default)]
    pub ui: SwaggerConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SwaggerConfig::default();
        assert_eq!(cfg.url, "doc.json");
        assert_eq!(cfg.doc_expansion, DocExpansion::List);
        assert_eq!(cfg.instance_name, "swagger");
        assert_eq!(cfg.title, "Swagger UI");
        assert_eq!(cfg.default_models_expand_depth, 1);
        assert!(cfg.deep_linking);
        assert!(!cfg.persist_authorization);
        assert!(cfg.oauth2_default_client_id.is_empty());
        assert!(!cfg.syntax_highlight);
    }

    #[test]
    fn test_doc_expansion_parse() {
        assert_eq!("full".parse::<DocExpansion>(), Ok(DocExpansion::Full));
        assert_eq!("none".parse::<DocExpansion>(), Ok(DocExpansion::None));
        assert!("expanded".parse::<DocExpansion>().is_err());
        assert_eq!(DocExpansion::List.to_string(), "list");
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let cfg: SwaggerConfig =
            serde_json::from_str(r#"{"doc_expansion":"none","title":"Pets"}"#).unwrap();
        assert_eq!(cfg.doc_expansion, DocExpansion::None);
        assert_eq!(cfg.title, "Pets");
        assert_eq!(cfg.url, "doc.json");
    }
}
