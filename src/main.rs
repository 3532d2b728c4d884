use anyhow::Result;
use axum::Router;
use std::io::ErrorKind;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config ---
    let cfg = config::AppConfig::from_env_and_args()?;

    // Secret fields render redacted; only their presence is recorded.
    tracing::info!("Starting devsecops-fixture with config: {:?}", cfg);
    tracing::debug!(
        db_credentials = cfg.db_username.is_some() && cfg.db_password.is_some(),
        api_key = cfg.api_key.is_some(),
        "credential material loaded from environment"
    );

    // --- Initialize the command execution boundary ---
    let runner = services::command_service::CommandService::new(
        cfg.command_timeout(),
        cfg.command_max_output_bytes,
    );

    // --- Build router ---
    let app: Router = routes::routes::routes().with_state(runner);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
