mod handlers;
mod state;

use anyhow::Result;
use axum::{
    http::{header, Method},
    routing::{any, get},
    Router,
};
use photo_core::CloudinaryConfig;
use std::env;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

fn app(state: AppState) -> Router {
    // Browser preflights (OPTIONS) are answered here and never reach the handler
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/delete-photo", any(handlers::delete_photo))
        .route("/.netlify/functions/delete-photo", any(handlers::delete_photo))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photo_web=info,photo_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Credentials are read once; missing ones fail requests, not startup
    let config = CloudinaryConfig::from_env();
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

    let state = AppState::new(&config);
    let app = app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Photo delete service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
