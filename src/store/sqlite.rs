// src/store/sqlite.rs

use async_trait::async_trait;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{str::FromStr, time::Duration};

use super::{LeaderboardStore, StoreError};
use crate::models::leaderboard::{LeaderboardEntry, NewEntry};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS leaderboard (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        username    TEXT    NOT NULL,
        score       INTEGER NOT NULL,
        total       INTEGER NOT NULL,
        difficulty  TEXT    NOT NULL,
        created_at  TEXT    NOT NULL
    )
"#;

/// Append-only leaderboard table backed by SQLite.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connects to `database_url` and makes sure the table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // In-memory databases are per connection, so keep exactly one.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, creating the table if needed.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl LeaderboardStore for SqliteStore {
    async fn list(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT username, score, total, difficulty, created_at
            FROM leaderboard
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn append(&self, entry: NewEntry) -> Result<LeaderboardEntry, StoreError> {
        let created_at = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO leaderboard (username, score, total, difficulty, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.username)
        .bind(entry.score)
        .bind(entry.total)
        .bind(&entry.difficulty)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(LeaderboardEntry {
            username: entry.username,
            score: entry.score,
            total: entry.total,
            difficulty: entry.difficulty,
            created_at: Some(created_at),
        })
    }
}
