// 🌐 Server Host - Serves the pre-rendered dashboard
//
// One route (GET /). The page is rendered before the listener is bound and
// shared read-only between connections.

use axum::{body::Bytes, extract::State, response::Html, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};

/// Shared application state
#[derive(Clone)]
struct AppState {
    page: Bytes,
}

/// GET / - Serve the dashboard
async fn serve_dashboard(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page.clone())
}

/// Router exposing the rendered page at `/` and nothing else
pub fn router(page_html: impl Into<Bytes>) -> Router {
    let state = AppState {
        page: page_html.into(),
    };

    Router::new()
        .route("/", get(serve_dashboard))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub struct DashboardServer {
    listener: TcpListener,
    addr: SocketAddr,
}

impl DashboardServer {
    /// Bind the listening socket; fails if the port is already taken
    pub async fn bind(config: &DashboardConfig) -> Result<Self> {
        let requested = config.socket_addr();

        let listener = TcpListener::bind(requested)
            .await
            .map_err(|source| DashboardError::Bind {
                addr: requested,
                source,
            })?;
        let addr = listener
            .local_addr()
            .map_err(|source| DashboardError::Bind {
                addr: requested,
                source,
            })?;

        tracing::info!(%addr, "dashboard listening");
        Ok(DashboardServer { listener, addr })
    }

    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until Ctrl+C
    pub async fn serve(self, app: Router) -> Result<()> {
        self.serve_with_shutdown(app, shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves
    pub async fn serve_with_shutdown<F>(self, app: Router, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(DashboardError::Serve)?;

        tracing::info!(addr = %self.addr, "dashboard stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("interrupt received, shutting down"),
        Err(e) => {
            // Without a signal handler the process runs until killed
            tracing::error!(error = %e, "failed to listen for interrupt");
            std::future::pending::<()>().await
        }
    }
}
