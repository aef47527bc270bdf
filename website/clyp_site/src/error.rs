use std::net::SocketAddr;

/// Failures that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("could not bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("could not build the upstream HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
