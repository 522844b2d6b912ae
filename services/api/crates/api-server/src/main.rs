//! cominty-api entry point.
//!
//! Initialises tracing, loads configuration from `COMINTY_API_*` environment
//! variables and serves the greeting/sum router over HTTP, or HTTPS when a
//! certificate and key are configured.

use anyhow::{bail, Context, Result};
use axum_server::tls_rustls::RustlsConfig;
use tracing_subscriber::EnvFilter;

use cominty_common::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("cominty-api starting");

    let config: ServerConfig = envy::prefixed("COMINTY_API_")
        .from_env()
        .context("failed to load config from COMINTY_API_* env vars")?;

    if let Some(missing) = config.incomplete_tls() {
        bail!("TLS is half configured: set {missing} as well, or unset both TLS variables");
    }

    tracing::info!(
        listen_addr = %config.listen_addr,
        tls_enabled = config.tls_paths().is_some(),
        "configuration loaded",
    );

    let router = cominty_api::router();

    if let Some((cert_path, key_path)) = config.tls_paths() {
        tracing::info!("TLS enabled, loading cert from {cert_path}");
        let tls_config = RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .context("failed to load TLS certificates")?;

        tracing::info!("server ready on https://{}", config.listen_addr);

        axum_server::bind_rustls(config.listen_addr, tls_config)
            .serve(router.into_make_service())
            .await
            .context("HTTPS server error")?;
    } else {
        tracing::info!("server ready on http://{} (TLS disabled)", config.listen_addr);

        let listener = tokio::net::TcpListener::bind(config.listen_addr)
            .await
            .context("failed to bind TCP listener")?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;
    }

    tracing::info!("cominty-api shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) for graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
