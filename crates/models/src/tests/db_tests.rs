use crate::db::{connect_options, connect_with_config};
use anyhow::Result;
use configs::DatabaseConfig;
use once_cell::sync::Lazy;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::Duration;

static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL").unwrap_or_default()
});

fn db_tests_disabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}

#[test]
fn connect_options_follow_config() {
    let cfg = DatabaseConfig {
        url: "postgres://u:p@localhost:5432/d".into(),
        max_connections: 7,
        min_connections: 3,
        connect_timeout_secs: 5,
        ..DatabaseConfig::default()
    };
    let opt = connect_options(&cfg);
    assert_eq!(opt.get_url(), "postgres://u:p@localhost:5432/d");
    assert_eq!(opt.get_max_connections(), Some(7));
    assert_eq!(opt.get_min_connections(), Some(3));
    assert_eq!(opt.get_connect_timeout(), Some(Duration::from_secs(5)));
}

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    if db_tests_disabled() {
        println!("Skipping database tests (no DATABASE_URL or SKIP_DB_TESTS is set)");
        return Ok(());
    }

    let cfg = DatabaseConfig { url: DATABASE_URL.clone(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

/// Test connection with custom configuration
#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    if db_tests_disabled() {
        return Ok(());
    }

    let config = DatabaseConfig {
        url: DATABASE_URL.clone(),
        max_connections: 5,
        min_connections: 1,
        connect_timeout_secs: 10,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&config).await?;

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT current_database()".to_string());
    let result = db.query_one(stmt).await?;
    assert!(result.is_some());
    Ok(())
}
