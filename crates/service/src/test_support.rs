#![cfg(test)]
use sea_orm::DatabaseConnection;
use configs::DatabaseConfig;
use models::db::connect_with_config;

/// Postgres-backed tests run only when `DATABASE_URL` is set and `SKIP_DB_TESTS` is not.
pub fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env();
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout_secs = 10;
    let db = connect_with_config(&cfg).await?;
    Ok(db)
}

/// A city name no other test run uses, so filtered reads see only this test's rows.
pub fn unique_city(prefix: &str) -> String {
    format!("{prefix}_{}", uuid::Uuid::new_v4())
}
