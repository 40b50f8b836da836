use std::net::SocketAddr;
use tracing::info;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::web::{app_router, AppState};

/// Start the HTTP server on the configured port
pub async fn start_server(state: AppState, config: &SiteConfig) -> Result<()> {
    let app = app_router(state, &config.server.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, static_dir = %config.server.static_dir.display(), "web server listening");
    println!("Web server listening on http://localhost:{}", config.server.port);
    println!("Health check: http://localhost:{}/health", config.server.port);

    axum::serve(listener, app).await?;

    Ok(())
}
