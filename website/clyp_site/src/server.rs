//! HTTP/1.1 accept loop.

use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clyp_stats::StatsSource;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::routes::dispatch;
use crate::{AppState, SiteError};

/// Pause after an accept error that is not tied to a single connection.
const ACCEPT_BACKOFF: Duration = Duration::from_secs(1);

/// Bind `addr`, mapping failures to [`SiteError::Bind`].
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, SiteError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })
}

/// Serve connections from `listener` until `shutdown` resolves.
///
/// Each connection runs on its own task. After shutdown no new connections
/// are accepted; ones already in flight finish on their tasks.
pub async fn serve<S, F>(
    listener: TcpListener,
    state: Arc<AppState<S>>,
    shutdown: F,
) -> Result<(), SiteError>
where
    S: StatsSource + 'static,
    F: Future<Output = ()>,
{
    if let Ok(local) = listener.local_addr() {
        tracing::info!(%local, "listening");
    }
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(accepted) => accepted,
                    Err(err) => {
                        accept_failed(&err).await;
                        continue;
                    }
                };
                let state = Arc::clone(&state);
                tokio::task::spawn(async move {
                    let service = service_fn(move |request: Request<Incoming>| {
                        let state = Arc::clone(&state);
                        async move { Ok::<_, Infallible>(dispatch(&state, request).await) }
                    });
                    if let Err(err) = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        tracing::error!(%peer, error = %err, "connection failed");
                    }
                });
            }
            () = &mut shutdown => {
                tracing::info!("shutdown requested, no longer accepting connections");
                break;
            }
        }
    }

    Ok(())
}

/// Log an accept error. Errors that belong to one aborted connection are
/// retried at once; anything else (usually `EMFILE`) backs off first so a
/// full descriptor table does not spin the loop.
async fn accept_failed(err: &io::Error) {
    tracing::error!(error = %err, "failed to accept connection");
    if !is_connection_error(err) {
        tokio::time::sleep(ACCEPT_BACKOFF).await;
    }
}

fn is_connection_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
    )
}
