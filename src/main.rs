//! Restaurant Reviews Backend
//!
//! A REST backend over a single JSON document listing restaurants and their reviews.

mod api;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use store::{Repository, Store};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let json = config.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting Restaurant Reviews Backend");
    tracing::info!("Data path: {:?}", config.data_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Open the data file and make sure it parses before accepting traffic
    let store = Store::open(&config.data_path).await?;
    let restaurants = store.load().await?;
    tracing::info!(
        "Loaded {} restaurants from {:?}",
        restaurants.len(),
        store.path()
    );

    let state = AppState {
        repo: Arc::new(Repository::new(store)),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/restaurants",
            get(api::list_restaurants).post(api::post_restaurants),
        )
        .route(
            "/restaurants/{id}",
            get(api::get_restaurant)
                .put(api::put_review)
                .delete(api::delete_restaurant),
        );

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
