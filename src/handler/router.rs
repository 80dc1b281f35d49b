//! Request dispatch module
//!
//! Entry point for Swagger requests: method check, resource matching,
//! one-time prefix capture and dispatch to the serving strategy.

use super::error::DispatchError;
use super::resource::{match_resource, Resource};
use super::{template, SwaggerHandler};
use crate::assets::AssetStore;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use tokio::io::AsyncReadExt;

impl<S: AssetStore> SwaggerHandler<S> {
    /// Serve one request
    ///
    /// The request body is never read.
    pub async fn handle<B>(&self, req: Request<B>) -> Response<Full<Bytes>> {
        let (parts, _) = req.into_parts();
        match self.dispatch(&parts.method, parts.uri.path()).await {
            Ok(response) => response,
            Err(err) => err.into_response(),
        }
    }

    /// Resolve a method and path to a response, or the error that ends the request
    pub async fn dispatch(
        &self,
        method: &Method,
        path: &str,
    ) -> Result<Response<Full<Bytes>>, DispatchError> {
        if method != Method::GET {
            return Err(DispatchError::MethodNotAllowed);
        }

        let matched = match_resource(path).ok_or(DispatchError::UnknownResource)?;
        // First match wins, later prefixes are ignored
        self.route_prefix.get_or_init(|| matched.prefix.to_string());

        let content_type = http::content_type_for(matched.resource.name());
        let body = match matched.resource {
            Resource::Index => Bytes::from(template::render_index(&self.config)),
            Resource::Doc => self
                .registry
                .read_doc(&self.config.instance_name)
                .map(Bytes::from)
                .map_err(DispatchError::DocumentNotRegistered)?,
            Resource::Asset(name) => self.read_asset(name).await?,
        };

        Ok(http::build_ok_response(body, content_type))
    }

    /// Read a whole asset before anything is sent, so a failed read never
    /// leaves a truncated 200 behind
    async fn read_asset(&self, name: &'static str) -> Result<Bytes, DispatchError> {
        let unavailable = |source| DispatchError::AssetUnavailable { name, source };

        let mut reader = self.store.open(name).await.map_err(unavailable)?;
        let mut content = Vec::new();
        reader.read_to_end(&mut content).await.map_err(unavailable)?;
        Ok(Bytes::from(content))
    }
}
