//! Tests for database connection management

use sf_shared::config::DatabaseConfig;

use crate::database::DatabasePool;

#[tokio::test]
async fn test_in_memory_pool_is_healthy() {
    let pool = DatabasePool::in_memory().await.unwrap();

    assert!(pool.health_check().await.unwrap());
    assert_eq!(pool.get_statistics().max_connections, 1);
}

#[tokio::test]
async fn test_migrate_is_idempotent() {
    let pool = DatabasePool::in_memory().await.unwrap();
    pool.migrate().await.unwrap();
    pool.migrate().await.unwrap();
}

#[tokio::test]
async fn test_file_database_is_created() {
    let path = std::env::temp_dir().join(format!("sf-test-{}.db", uuid::Uuid::new_v4()));
    let url = format!("sqlite://{}", path.display());

    let pool = DatabasePool::new(DatabaseConfig::new(url)).await.unwrap();
    pool.migrate().await.unwrap();
    pool.close().await;

    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
}
