//! HTTP server for humidor (axum).
//!
//! Listens on http://127.0.0.1:8787 by default and serves `POST /recommend` and `GET /health`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`router`], [`resolve_addr`].

mod app;
mod error;

use std::sync::Arc;

use humidor::{Recommender, RecommenderConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub use app::{router, AppState};
pub use error::ApiError;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8787";

/// Picks the listen address: explicit `addr`, then `HUMIDOR_ADDR`, then [`DEFAULT_ADDR`].
pub fn resolve_addr(addr: Option<&str>) -> String {
    addr.map(str::to_string)
        .or_else(|| std::env::var("HUMIDOR_ADDR").ok().filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_ADDR.to_string())
}

/// Serves on an existing listener until Ctrl+C or SIGTERM. Used by tests (bind to
/// 127.0.0.1:0 then pass the listener).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    recommender: Arc<Recommender>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("humidor listening on http://{}", addr);
    if !recommender.has_client() {
        warn!("OPENAI_API_KEY is not set; /recommend will answer 500");
    }

    let app = router(Arc::new(AppState { recommender }));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server shut down");
    Ok(())
}

/// Runs the server with a recommender built from the environment.
pub async fn run_serve(addr: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = resolve_addr(addr);
    let recommender = Arc::new(Recommender::from_config(RecommenderConfig::from_env()));
    let listener = TcpListener::bind(&addr).await?;
    run_serve_on_listener(listener, recommender).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "cannot listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
