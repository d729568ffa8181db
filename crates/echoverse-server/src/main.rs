//! EchoVerse Server - HTTP API for tone-adapted audiobooks

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use echoverse_core::ServerConfig;
use echoverse_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "echoverse_server=debug,echoverse_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EchoVerse server");

    // Load configuration
    let config = ServerConfig::load()?;
    info!("Session idle timeout: {:?}", config.session_idle_timeout());

    let addr = config.bind_addr();
    let state = AppState::new(config);
    state.spawn_session_reaper();

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
