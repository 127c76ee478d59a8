//! HTTP server thread used by the `serve` subcommand

use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::Context;
use tracing::info;

use crate::{AppState, RestApi, ServerConfig};

/// Run the REST API on its own actix `System` thread
pub fn spawn_http_server(state: Arc<AppState>, config: ServerConfig) -> JoinHandle<std::io::Result<()>> {
    std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", config.host, config.port);
        let sys = actix_web::rt::System::new();
        sys.block_on(RestApi::start(state, config))
    })
}

/// Wait for the server thread; bind and runtime failures become errors
pub fn join_http_server(handle: JoinHandle<std::io::Result<()>>) -> anyhow::Result<()> {
    match handle.join() {
        Ok(result) => result.context("HTTP server failed"),
        Err(_) => anyhow::bail!("HTTP server thread panicked"),
    }
}
