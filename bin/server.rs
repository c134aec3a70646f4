// CFO Dashboard - Web Server
// Builds the dashboard once, then serves it on port 8050 until Ctrl+C.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfo_dashboard::{
    render_dashboard, router, DashboardConfig, DashboardServer, Dataset, DEFAULT_LOG_FILTER,
    VERSION,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = VERSION, "starting CFO dashboard");

    // Everything below the listener is computed once, before serving
    let dataset = Dataset::generate_random();
    let page = render_dashboard(&dataset);

    let config = DashboardConfig::default();
    let server = DashboardServer::bind(&config)
        .await
        .with_context(|| format!("cannot start dashboard on {}", config.socket_addr()))?;

    tracing::info!(
        "dashboard available at http://localhost:{}/ (Ctrl+C to stop)",
        server.local_addr().port()
    );

    server.serve(router(page)).await?;

    Ok(())
}
