//! Dispatch error module
//!
//! Every failure is local to one request and maps to a terminal status.

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::fmt;
use std::io;

/// Reason a request ends without a 200
#[derive(Debug)]
pub enum DispatchError {
    /// Request method is not GET
    MethodNotAllowed,
    /// Path does not end in a known resource name
    UnknownResource,
    /// No document registered under the configured instance name
    DocumentNotRegistered(crate::registry::RegistryError),
    /// Asset could not be opened or read
    AssetUnavailable { name: &'static str, source: io::Error },
}

impl DispatchError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnknownResource => StatusCode::NOT_FOUND,
            Self::DocumentNotRegistered(_) | Self::AssetUnavailable { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn into_response(self) -> Response<Full<Bytes>> {
        match self {
            Self::MethodNotAllowed => http::build_405_response(),
            Self::UnknownResource => http::build_404_response(),
            Self::DocumentNotRegistered(_) | Self::AssetUnavailable { .. } => {
                http::build_500_response()
            }
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MethodNotAllowed => write!(f, "method not allowed"),
            Self::UnknownResource => write!(f, "unknown resource"),
            Self::DocumentNotRegistered(err) => write!(f, "document unavailable: {err}"),
            Self::AssetUnavailable { name, source } => {
                write!(f, "asset '{name}' unavailable: {source}")
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DocumentNotRegistered(err) => Some(err),
            Self::AssetUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            DispatchError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(DispatchError::UnknownResource.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            DispatchError::DocumentNotRegistered(RegistryError::NothingRegistered).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let err = DispatchError::AssetUnavailable {
            name: "swagger-ui.css",
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "asset 'swagger-ui.css' unavailable: gone");
    }

    #[test]
    fn test_response_matches_status() {
        let err = DispatchError::DocumentNotRegistered(RegistryError::NotRegistered(
            "swagger".to_string(),
        ));
        let status = err.status();
        assert_eq!(err.into_response().status(), status);
    }
}
