//! Server Implementation
//!
//! Router assembly, HTTP listener startup, and graceful shutdown.

use axum::{Router, middleware};
use http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

use crate::api;
use crate::core::middleware::log_request;
use crate::core::{Config, ServerState};

/// Assemble the full application router
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .merge(api::router())
        .merge(api::health::router())
        .merge(api::auth::router(&state))
        .merge(api::employees::router(&state))
        .fallback(api::fallback)
        .layer(cors_layer(&state.config))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// CORS layer restricted to the configured browser origin
fn cors_layer(config: &Config) -> CorsLayer {
    match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
        Err(_) => {
            tracing::warn!(
                origin = %config.cors_origin,
                "Invalid CORS_ORIGIN, falling back to permissive CORS"
            );
            CorsLayer::permissive()
        }
    }
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let app = build_app(self.state.clone());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!(
            environment = %self.config.environment,
            "Server listening on {addr}"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
