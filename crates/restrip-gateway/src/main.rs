use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod app;
mod http;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restrip_gateway=info,tower_http=debug".into()),
        )
        .init();

    // load config: explicit path via RESTRIP_CONFIG > ~/.restrip/restrip.toml
    let config_path = std::env::var("RESTRIP_CONFIG").ok();
    let config =
        restrip_core::RestripConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
            tracing::warn!("Config load failed ({}), using defaults", e);
            restrip_core::RestripConfig::default()
        });

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port).parse()?;

    // In-process collaborators until real storage/delivery backends land.
    let state = Arc::new(app::AppState::in_memory(config));
    let router = app::build_router(state);

    info!(%addr, "restrip gateway listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
