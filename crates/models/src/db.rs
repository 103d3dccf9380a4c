use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Open a connection pool tuned by `cfg`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database pool opened"
    );
    Ok(db)
}

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    opt
}
