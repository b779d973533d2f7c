pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

use axum::http::{header, Method};
use axum::middleware;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Конфиг читается до логгера: каталог логов задан в нём
    let config = shared::config::load_config()?;
    shared::logger::init(&config)?;

    match &config.loaded_from {
        Some(path) => tracing::info!("Loaded config from: {}", path.display()),
        None => tracing::info!("Using default embedded configuration"),
    }

    if config.seed.demo_data {
        shared::data::seed::seed_demo_data().await?;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes()
        .layer(middleware::from_fn(shared::logger::request_logger))
        .layer(cors);

    let addr = shared::config::bind_address(&config);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("DSP mock data service listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
