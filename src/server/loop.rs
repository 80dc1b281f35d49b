// Server loop module
// Accepts connections until a shutdown signal arrives

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::ServerState;
use crate::assets::AssetStore;
use crate::logger;

/// Accept connections on `listener` until `shutdown` resolves
///
/// `shutdown` yields a short reason that is written to the log.
pub async fn start_server_loop<S, F>(
    listener: TcpListener,
    state: Arc<ServerState<S>>,
    shutdown: F,
) -> std::io::Result<()>
where
    S: AssetStore,
    F: Future<Output = &'static str>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            reason = &mut shutdown => {
                logger::log_shutdown(reason);
                return Ok(());
            }
        }
    }
}
