//! PostgreSQL repository tests. Need a database: `DATABASE_URL=... cargo test -- --ignored`.

use sqlx::PgPool;
use std::sync::Arc;
use urlmap::domain::entities::NewUrlMapping;
use urlmap::domain::repositories::UrlMappingRepository;
use urlmap::infrastructure::persistence::PgUrlMappingRepository;

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_insert_if_absent(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    let result = repo
        .insert_if_absent(NewUrlMapping::new("ab12XY", "https://example.com/page"))
        .await;

    assert!(result.is_ok());
    let mapping = result.unwrap().unwrap();
    assert_eq!(mapping.code, "ab12XY");
    assert_eq!(mapping.original_url, "https://example.com/page");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_insert_existing_code_writes_nothing(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool.clone()));

    repo.insert_if_absent(NewUrlMapping::new("taken1", "https://first.com"))
        .await
        .unwrap();

    let second = repo
        .insert_if_absent(NewUrlMapping::new("taken1", "https://second.com"))
        .await
        .unwrap();
    assert!(second.is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_map")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let stored = repo.find_by_code("taken1").await.unwrap().unwrap();
    assert_eq!(stored.original_url, "https://first.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_find_by_code(pool: PgPool) {
    sqlx::query("INSERT INTO url_map (code, original_url) VALUES ($1, $2)")
        .bind("xyz789")
        .bind("https://rust-lang.org")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    let link = repo.find_by_code("xyz789").await.unwrap();
    assert_eq!(link.unwrap().original_url, "https://rust-lang.org");

    assert!(repo.find_by_code("XYZ789").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));

    let result = repo.find_by_code("notfound").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlMappingRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}
