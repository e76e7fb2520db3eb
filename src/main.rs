//! Binary entry point for the password validation service.

use std::net::SocketAddr;

use anyhow::Result;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("valida_senha=info")),
        )
        .init();

    let host = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = match std::env::var("PORT") {
        Ok(value) => value.parse()?,
        Err(_) => 8000,
    };
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    let app = valida_senha::api::router();

    tracing::info!("validation service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
