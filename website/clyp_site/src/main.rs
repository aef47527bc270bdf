//! `clyp-site`: serve the Clyp website API.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use clyp_site::{logging, server, AppState, SiteConfig, SiteError};

#[tokio::main]
async fn main() -> ExitCode {
    let config = SiteConfig::parse();
    logging::init_tracing();

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "clyp-site stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &SiteConfig) -> Result<(), SiteError> {
    let state = Arc::new(AppState::from_config(config)?);
    let listener = server::bind(config.addr).await?;
    server::serve(listener, state, shutdown_signal()).await?;
    tracing::info!("clyp-site stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
}
