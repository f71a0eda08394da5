#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use activities_portal::config::AppConfig;
use activities_portal::database::{self, activities_repo, schema};
use activities_portal::models::ActivitiesRow;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Fresh seeded in-memory database. A single connection keeps every query on
/// the same in-memory instance.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    schema::init_db(&pool).await.expect("init schema");
    pool
}

/// Config pointing at a database file under `dir`.
pub fn file_config(dir: &Path, max_connections: u32) -> AppConfig {
    AppConfig {
        database_url: format!("sqlite://{}", dir.join("activities.db").display()),
        max_connections,
        busy_timeout: Duration::from_secs(10),
        ..AppConfig::default()
    }
}

/// Seeded database file under `dir`, shared by several connections.
pub async fn file_pool(dir: &Path, max_connections: u32) -> SqlitePool {
    let config = file_config(dir, max_connections);
    let pool = database::connect(&config).await.expect("open sqlite file");
    schema::init_db(&pool).await.expect("init schema");
    pool
}

pub async fn participants(pool: &SqlitePool, name: &str) -> Vec<String> {
    row(pool, name).await.participants().expect("valid roster json")
}

pub async fn row(pool: &SqlitePool, name: &str) -> ActivitiesRow {
    activities_repo::find_by_name(pool, name)
        .await
        .expect("query activity")
        .expect("activity exists")
}

pub async fn set_participants(pool: &SqlitePool, name: &str, list: &[String]) {
    let json = serde_json::to_string(list).expect("encode roster");
    activities_repo::save_participants(pool, name, &json)
        .await
        .expect("save roster");
}

pub fn students(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}@mergington.edu", prefix, i)).collect()
}
