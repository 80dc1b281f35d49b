// Connection handling module
// Serves a single TCP connection and routes its requests to the mounted handler

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, Version};
use hyper_util::rt::TokioIo;

use super::ServerState;
use crate::assets::AssetStore;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Accept a connection, enforcing the connection limit
pub fn accept_connection<S: AssetStore>(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<ServerState<S>>,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = state.active_connections.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            state.active_connections.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return;
        }
    }

    handle_connection(stream, peer_addr, Arc::clone(state));
}

/// Serve one connection in a spawned task, with keep-alive and a timeout
fn handle_connection<S: AssetStore>(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<ServerState<S>>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.keep_alive);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&service_state);
                async move { Ok::<_, Infallible>(serve_request(req, peer_addr, &state).await) }
            }),
        );

        match tokio::time::timeout(state.connection_timeout, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    state.connection_timeout.as_secs()
                ));
            }
        }

        state.active_connections.fetch_sub(1, Ordering::SeqCst);
    });
}

/// Route one request and write its access log line
async fn serve_request<S: AssetStore, B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: &ServerState<S>,
) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let entry = state
        .logging
        .access_log
        .then(|| access_entry(&req, peer_addr));

    let response = route_request(req, state).await;

    if let Some(mut entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.logging.access_log_format);
    }

    response
}

/// Send requests under the mount to the Swagger handler
///
/// A GET for the bare mount redirects to its `index.html`; anything outside
/// the mount is a plain 404.
pub async fn route_request<S: AssetStore, B>(
    req: Request<B>,
    state: &ServerState<S>,
) -> Response<Full<Bytes>> {
    let path = req.uri().path();
    let bare_mount = path == state.mount || path == state.mount.trim_end_matches('/');
    if bare_mount && req.method() == Method::GET {
        return http::build_redirect_response(&format!("{}index.html", state.mount));
    }

    if path.starts_with(state.mount.as_str()) {
        return state.handler.handle(req).await;
    }

    http::build_404_response()
}

fn access_entry<B>(req: &Request<B>, peer_addr: SocketAddr) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = http_version(req.version()).to_string();
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry
}

const fn http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssetStore;
    use crate::config::Settings;
    use crate::handler::wrap_handler;
    use crate::registry::DocumentRegistry;
    use hyper::StatusCode;

    fn test_state(mount: &str) -> ServerState<MemoryAssetStore> {
        let mut settings = Settings::load_from("does-not-exist/swagger").unwrap();
        settings.swagger.mount = mount.to_string();
        settings.logging.access_log = false;

        let store = MemoryAssetStore::new().with_file("swagger-ui.css", "body{}");
        let handler = wrap_handler(store, Vec::new())
            .with_registry(Arc::new(DocumentRegistry::new()));
        ServerState::new(handler, &settings)
    }

    fn get(path: &str) -> Request<()> {
        Request::builder().uri(path).body(()).unwrap()
    }

    #[tokio::test]
    async fn test_mounted_requests_reach_handler() {
        let state = test_state("/api/docs");

        let resp = route_request(get("/api/docs/index.html"), &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(state.handler.route_prefix(), Some("/api/docs/"));

        let resp = route_request(get("/api/docs/swagger-ui.css"), &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_outside_mount_is_404() {
        let state = test_state("/swagger/");
        let resp = route_request(get("/index.html"), &state).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(state.handler.route_prefix().is_none());
    }

    #[tokio::test]
    async fn test_bare_mount_redirects() {
        let state = test_state("/swagger/");
        for path in ["/swagger", "/swagger/"] {
            let resp = route_request(get(path), &state).await;
            assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
            assert_eq!(resp.headers()["Location"], "/swagger/index.html");
        }
    }

    #[test]
    fn test_access_entry_fields() {
        let req = Request::builder()
            .uri("/swagger/index.html?x=1")
            .header("user-agent", "curl/8.0")
            .body(())
            .unwrap();
        let entry = access_entry(&req, "10.0.0.1:5000".parse().unwrap());
        assert_eq!(entry.remote_addr, "10.0.0.1");
        assert_eq!(entry.path, "/swagger/index.html");
        assert_eq!(entry.query.as_deref(), Some("x=1"));
        assert_eq!(entry.user_agent.as_deref(), Some("curl/8.0"));
        assert_eq!(entry.http_version, "1.1");
    }
}
