//! Entry point for the Serial Engine binary.
//!
//! Running this binary starts an HTTP server that exposes the check
//! digit calculator and batch generator.  The bind address is taken
//! from `SERIAL_BIND_ADDR` and the log filter from `RUST_LOG`.

use serial_engine::config::ServerConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    if let Err(err) = serial_engine::api::serve(config).await {
        error!(error = %err, "server stopped");
        return Err(err);
    }
    Ok(())
}
