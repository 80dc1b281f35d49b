//! MIME type detection module
//!
//! Maps a served resource name to its Content-Type by extension.

/// Get the Content-Type for a resource name, based on its final extension
///
/// Source maps and extensionless names get no Content-Type at all.
///
/// # Examples
/// ```
/// use swagger_handler::http::mime::content_type_for;
/// assert_eq!(content_type_for("index.html"), Some("text/html; charset=utf-8"));
/// assert_eq!(content_type_for("swagger-ui.js.map"), None);
/// ```
pub fn content_type_for(name: &str) -> Option<&'static str> {
    let (_, extension) = name.rsplit_once('.')?;
    match extension {
        "html" => Some("text/html; charset=utf-8"),
        "css" => Some("text/css; charset=utf-8"),
        "js" => Some("application/javascript"),
        "png" => Some("image/png"),
        "json" => Some("application/json; charset=utf-8"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(
            content_type_for("index.html"),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(
            content_type_for("swagger-ui.css"),
            Some("text/css; charset=utf-8")
        );
        assert_eq!(
            content_type_for("swagger-ui-bundle.js"),
            Some("application/javascript")
        );
        assert_eq!(content_type_for("favicon-16x16.png"), Some("image/png"));
        assert_eq!(
            content_type_for("doc.json"),
            Some("application/json; charset=utf-8")
        );
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(content_type_for("swagger-ui.css.map"), None);
        assert_eq!(content_type_for("README"), None);
        assert_eq!(content_type_for("archive.zip"), None);
    }
}
