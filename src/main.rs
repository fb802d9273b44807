use axum::serve;
use roster_api::api::{create_router, AppState};
use roster_api::config::AppConfig;
use roster_api::store::{DocumentStore, FirebaseStore, MemoryStore};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("reqwest", LevelFilter::Warn)
        .init();

    let config = AppConfig::load()?;
    log::info!(
        "configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );

    match config.store.firebase_url.clone() {
        Some(url) => {
            log::info!("using Firebase Realtime Database at {url}");
            let store = Arc::new(FirebaseStore::new(&url, config.store.firebase_auth.clone()));
            run_server(store, &config).await
        }
        None => {
            log::warn!("no firebase_url configured; using the in-memory store (data is not persisted)");
            let store = Arc::new(MemoryStore::new());
            run_server(store, &config).await
        }
    }
}

async fn run_server<S: DocumentStore + 'static>(
    store: Arc<S>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let state = AppState {
        store,
        api: config.api.clone(),
    };
    let app = create_router().with_state(state);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("roster-api server running on http://{bind_address}");

    serve(listener, app).await?;

    Ok(())
}
