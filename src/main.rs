//! tikfetch - TikTok media lookup edge service
//!
//! This binary loads configuration from the environment and starts the HTTP
//! server. See the crate docs for the endpoint surface.

use tikfetch::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env if present (ignored in production)
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    tikfetch::start_server(config).await?;

    Ok(())
}
