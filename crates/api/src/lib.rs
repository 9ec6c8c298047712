//! `api` crate — HTTP REST API for posts.
//!
//! Exposes:
//!   GET    /health
//!   GET    /posts?page={n}
//!   GET    /posts/search?searchQuery={q}&tags={a,b}
//!   GET    /posts/{id}
//!   POST   /posts                  (auth)
//!   PATCH  /posts/{id}             (auth)
//!   DELETE /posts/{id}             (auth)
//!   PATCH  /posts/{id}/likePost    (auth)

pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, patch},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use posts::PostStore;

pub use auth::{AuthUser, JwtKeys};
pub use error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub auth: Arc<JwtKeys>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>, auth: JwtKeys) -> Self {
        Self { store, auth: Arc::new(auth) }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Allow any origin. Otherwise only the local dev front-end is allowed.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            cors_permissive: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn posts_router() -> Router<AppState> {
    use handlers::posts;

    Router::new()
        .route("/", get(posts::list).post(posts::create))
        .route("/search", get(posts::search))
        .route("/{id}", get(posts::get).patch(posts::update).delete(posts::delete))
        .route("/{id}/likePost", patch(posts::like))
}

/// Build the application router without network-facing layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/posts", posts_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(permissive: bool) -> CorsLayer {
    if permissive {
        warn!("CORS: permissive mode enabled - all origins allowed");
        return CorsLayer::permissive();
    }
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ]))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig, state: AppState) -> Result<(), ServerError> {
    let app = router(state).layer(cors_layer(config.cors_permissive));

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown"),
        _ = terminate => info!("Received SIGTERM, starting shutdown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(!config.cors_permissive);
    }
}
