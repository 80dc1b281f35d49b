//! Resource matching module
//!
//! Splits a request path into the route prefix and one of the resource names
//! the handler knows how to serve.

/// Served resource, selected from the last path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// UI bootstrap page rendered from the template
    Index,
    /// API description looked up in the document registry
    Doc,
    /// File opened from the asset store
    Asset(&'static str),
}

/// Asset files passed through from the asset store
const ASSET_NAMES: &[&str] = &[
    "favicon-16x16.png",
    "favicon-32x32.png",
    "oauth2-redirect.html",
    "swagger-ui.css",
    "swagger-ui.css.map",
    "swagger-ui.js",
    "swagger-ui.js.map",
    "swagger-ui-bundle.js",
    "swagger-ui-bundle.js.map",
    "swagger-ui-standalone-preset.js",
    "swagger-ui-standalone-preset.js.map",
];

impl Resource {
    /// Look up a resource by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "index.html" => Some(Self::Index),
            "doc.json" => Some(Self::Doc),
            _ => ASSET_NAMES
                .iter()
                .copied()
                .find(|asset| *asset == name)
                .map(Self::Asset),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Doc => "doc.json",
            Self::Asset(name) => name,
        }
    }
}

/// A path that named a known resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMatch<'a> {
    /// Everything before the resource name, trailing slash included
    pub prefix: &'a str,
    pub resource: Resource,
}

/// Match a request path (without query string) against the known resources
///
/// ```
/// use swagger_handler::handler::resource::{match_resource, Resource};
/// let m = match_resource("/docs/doc.json").unwrap();
/// assert_eq!(m.prefix, "/docs/");
/// assert_eq!(m.resource, Resource::Doc);
/// assert!(match_resource("/docs/notfound").is_none());
/// ```
pub fn match_resource(path: &str) -> Option<ResourceMatch<'_>> {
    let split = path.rfind('/').map_or(0, |i| i + 1);
    let (prefix, name) = path.split_at(split);
    Resource::from_name(name).map(|resource| ResourceMatch { prefix, resource })
}
