//! PostgreSQL directory tests
//!
//! Exercise `PgUserDirectory` against the real schema in `migrations/`.
//! Each test returns early when `DATABASE_URL` is not set.

#![cfg(feature = "ssr")]

mod common;

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum_test::TestServer;
use keygate::backend::auth::users::{DirectoryError, PgUserDirectory, UserDirectory};
use keygate::backend::server::create_app;
use keygate::shared::AuthConfig;
use serde_json::{json, Value};
use uuid::Uuid;

use common::*;

#[tokio::test]
async fn test_migrations_run_successfully() {
    let Some(pool) = create_test_pool().await else { return };

    assert!(run_migrations(&pool).await.is_ok(), "Migrations should run successfully");
    // Re-running is a no-op
    assert!(run_migrations(&pool).await.is_ok());

    let result = sqlx::query("SELECT 1 FROM users LIMIT 1").execute(&pool).await;
    assert!(result.is_ok(), "Users table should exist");
}

#[tokio::test]
async fn test_insert_round_trips_through_schema() {
    let Some(db) = TestDatabase::new().await else { return };
    let directory = PgUserDirectory::new(db.pool().clone());
    let email = unique_email();

    let created = directory.insert(&email, "$2b$04$digest").await.unwrap();
    assert!(created.is_active);
    assert_eq!(created.email, email);

    let by_email = directory.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(by_email.id, created.id);
    assert_eq!(by_email.password_hash, "$2b$04$digest");

    let by_id = directory.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, email);

    assert!(directory.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    assert!(directory.find_by_email(&unique_email()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_insert_is_conflict() {
    let Some(db) = TestDatabase::new().await else { return };
    let directory = PgUserDirectory::new(db.pool().clone());
    let email = unique_email();

    directory.insert(&email, "h1").await.unwrap();
    let result = directory.insert(&email, "h2").await;

    assert_matches!(result, Err(DirectoryError::Conflict));
}

#[tokio::test]
async fn test_concurrent_inserts_single_winner() {
    let Some(db) = TestDatabase::new().await else { return };
    let directory = Arc::new(PgUserDirectory::new(db.pool().clone()));
    let email = unique_email();

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let directory = Arc::clone(&directory);
            let email = email.clone();
            tokio::spawn(async move { directory.insert(&email, "h").await })
        })
        .collect();

    let mut created = 0;
    let mut conflicts = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => created += 1,
            Err(DirectoryError::Conflict) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_set_active_updates_row() {
    let Some(db) = TestDatabase::new().await else { return };
    let directory = PgUserDirectory::new(db.pool().clone());
    let user = directory.insert(&unique_email(), "h").await.unwrap();

    let updated = directory.set_active(user.id, false).await.unwrap().unwrap();
    assert!(!updated.is_active);
    assert!(updated.updated_at >= user.updated_at);
    assert!(!directory.find_by_id(user.id).await.unwrap().unwrap().is_active);

    assert!(directory.set_active(Uuid::new_v4(), false).await.unwrap().is_none());
}

#[tokio::test]
async fn test_api_flow_with_database() {
    let Ok(database_url) = std::env::var("DATABASE_URL") else { return };
    let config = AuthConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .token_ttl(Duration::from_secs(3600))
        .database_url(database_url)
        .build()
        .unwrap();
    let server = TestServer::new(create_app(&config).await.unwrap()).unwrap();
    let email = unique_email();

    let response = server
        .post("/api/register")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let duplicate = server
        .post("/api/register")
        .json(&json!({ "email": email.to_uppercase(), "password": TEST_PASSWORD }))
        .await;
    assert_eq!(duplicate.status_code(), StatusCode::BAD_REQUEST);

    let login = server
        .post("/api/login")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let body: Value = login.json();
    let (name, value) = auth_header(body["token"].as_str().unwrap());

    let profile = server.get("/api/profile").add_header(name, value).await;
    assert_eq!(profile.status_code(), StatusCode::OK);
    let profile: Value = profile.json();
    assert_eq!(profile["email"], email.as_str());
}
