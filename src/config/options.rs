//! Option functions for building a [`SwaggerConfig`]
//!
//! Each function returns a [`ConfigOption`] that sets exactly one field.
//! Options are applied left to right, so repeating an option for the same
//! field keeps the last value.

use super::types::{DocExpansion, SwaggerConfig};

/// A single configuration override
pub type ConfigOption = Box<dyn FnOnce(&mut SwaggerConfig) + Send>;

impl SwaggerConfig {
    /// Start from the defaults and apply `options` in order
    pub fn with_options(options: impl IntoIterator<Item = ConfigOption>) -> Self {
        let mut config = Self::default();
        config.apply(options);
        config
    }

    /// Apply `options` in order on top of the current values
    pub fn apply(&mut self, options: impl IntoIterator<Item = ConfigOption>) {
        for option in options {
            option(self);
        }
    }
}

/// URL pointing to the API definition (normally `doc.json`)
pub fn url(url: impl Into<String>) -> ConfigOption {
    let url = url.into();
    Box::new(move |c| c.url = url)
}

pub fn doc_expansion(expansion: DocExpansion) -> ConfigOption {
    Box::new(move |c| c.doc_expansion = expansion)
}

pub fn deep_linking(enabled: bool) -> ConfigOption {
    Box::new(move |c| c.deep_linking = enabled)
}

/// Default expansion depth for models, -1 hides them
pub fn default_models_expand_depth(depth: i32) -> ConfigOption {
    Box::new(move |c| c.default_models_expand_depth = depth)
}

/// Registry name the served document was registered under
pub fn instance_name(name: impl Into<String>) -> ConfigOption {
    let name = name.into();
    Box::new(move |c| c.instance_name = name)
}

pub fn persist_authorization(enabled: bool) -> ConfigOption {
    Box::new(move |c| c.persist_authorization = enabled)
}

pub fn oauth2_default_client_id(client_id: impl Into<String>) -> ConfigOption {
    let client_id = client_id.into();
    Box::new(move |c| c.oauth2_default_client_id = client_id)
}

pub fn syntax_highlight(enabled: bool) -> ConfigOption {
    Box::new(move |c| c.syntax_highlight = enabled)
}

pub fn title(title: impl Into<String>) -> ConfigOption {
    let title = title.into();
    Box::new(move |c| c.title = title)
}
