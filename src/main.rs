//! Server binary: opens the store, ensures the schema, mounts common and
//! course routes under /api/v1.

use course_api::{common_routes_with_ready, course_routes, AppState, CourseStore, ServerConfig};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("course_api=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let store = CourseStore::open(&config.database_url).await?;
    store.ensure_schema().await?;
    let state = AppState {
        store: store.clone(),
    };

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api/v1", course_routes(state))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    store.close().await;
    Ok(())
}
