

/// Database connection and configuration tests
pub mod db_tests;
