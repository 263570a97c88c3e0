//! Local web server for generated pages and sitemaps.
//!
//! Serves the same pipeline the CLI exposes: rendered pages under `/ai`,
//! JSON under `/api`, and the sitemap index with its chunks.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - API response types (DTOs)
//! - `templates` - HTML rendering

mod handlers;
mod models;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use pseo_core::config::ServerConfig;
use pseo_core::PseoEngine;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
pub struct AppState {
    /// Page engine; read-only, shared by every request.
    pub engine: Arc<PseoEngine>,
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Configuration for the page server.
pub struct ServeConfig {
    /// Port to listen on.
    pub port: u16,
    /// Whether to open the browser automatically.
    pub open_browser: bool,
}

impl From<&ServerConfig> for ServeConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            port: config.port,
            open_browser: config.open_browser,
        }
    }
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Build the router over an engine.
pub fn router(engine: Arc<PseoEngine>) -> Router {
    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/", get(handlers::index))
        .route("/ai", get(handlers::index))
        .route("/ai/{slug}", get(handlers::page))
        .route("/ai/category/{category}", get(handlers::category_page))
        // API endpoints
        .route("/api/pages/{slug}", get(handlers::api_page))
        .route("/api/hubs", get(handlers::api_hubs))
        .route("/api/hubs/{category}", get(handlers::api_hub))
        // Sitemaps
        .route("/sitemap.xml", get(handlers::sitemap_index))
        .route("/sitemaps/static.xml", get(handlers::static_sitemap))
        .route("/sitemaps/programmatic/{id}", get(handlers::programmatic_sitemap))
        // CORS for API access
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

/// Start the page server.
pub async fn start_server(
    engine: Arc<PseoEngine>,
    config: ServeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(engine);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let url = format!("http://localhost:{}", config.port);

    println!("Starting pseo server...");
    println!("Pages:   {}/", url);
    println!("Sitemap: {}/sitemap.xml", url);
    println!("Press Ctrl+C to stop\n");

    if config.open_browser {
        if let Err(e) = open::that(&url) {
            warn!(error = %e, "could not open browser");
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
