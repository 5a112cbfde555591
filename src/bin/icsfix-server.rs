use anyhow::Context;
use icsfix::server::{self, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load configuration")?;

    server::init_tracing(&settings.logging);
    tracing::info!(config = ?settings, "Configuration loaded");

    server::serve(settings).await
}
