//! `protect-svc` — service binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Construct the codec and signer and wrap them in [`AppState`].
//! 4. Build the Axum router and start the HTTP server.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use protect::algo::base64::Base64Codec;
use protect::algo::hmac::HmacSha256Signer;
use protect::config::Config;
use protect::server::{router, state::AppState};
use protect::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        listen_port = cfg.listen_port,
        "protect-svc starting"
    );

    // -----------------------------------------------------------------------
    // 3. Algorithms + shared state
    // -----------------------------------------------------------------------
    let state = AppState::new(
        Arc::new(Base64Codec),
        Arc::new(HmacSha256Signer::new(cfg.signing_secret.clone())),
    );

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let router = router::build(state);
    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.listen_port).into();
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
