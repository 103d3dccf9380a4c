use std::sync::Arc;

use configs::AppConfig;
use service::building::repo::SeaOrmBuildingRepository;
use service::CancellationToken;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open storage, prepare the schema and serve HTTP until `shutdown` is cancelled.
pub async fn run(cfg: AppConfig, shutdown: CancellationToken) -> Result<(), StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Storage(e.to_string()))?;
    let repo = Arc::new(SeaOrmBuildingRepository::new(db));

    let state = ServerState::new(repo.clone(), shutdown.clone());
    state.buildings.init(&shutdown).await?;

    let app = routes::build_router(state, build_cors());
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(addr.as_str()).await?;
    info!(%addr, "building catalog listening");

    let stop = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { stop.cancelled().await })
        .await?;

    info!("http server stopped; closing database pool");
    if let Ok(repo) = Arc::try_unwrap(repo) {
        repo.close().await.map_err(|e| StartupError::Storage(e.to_string()))?;
    }
    Ok(())
}
