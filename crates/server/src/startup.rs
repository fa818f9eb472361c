use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use configs::AppConfig;
use service::catalog::{seed, service::CatalogService, store::CatalogStore};
use service::users::{service::RegistrationService, store::UserStore};

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils; `LOG_FORMAT=json` selects
/// structured output.
fn init_logging() {
    common::utils::logging::init_logging();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Seed the catalog and assemble stores and services into shared state.
pub fn build_state(config: &AppConfig) -> anyhow::Result<ServerState> {
    let catalog_seed = seed::resolve(config.catalog.seed_path.as_deref())?;
    info!(books = catalog_seed.len(), "catalog seeded");

    let catalog_store = CatalogStore::new(catalog_seed);
    let user_store = UserStore::new();
    Ok(ServerState {
        catalog: Arc::new(CatalogService::new(catalog_store)),
        registry: Arc::new(RegistrationService::new(user_store)),
    })
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let config = AppConfig::load_and_validate()?;
    let state = build_state(&config)?;

    // Build router
    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "starting bookstore api");
    println!("starting bookstore api at {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
