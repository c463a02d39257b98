// src/store/mod.rs

//! Persistence collaborator for leaderboard entries.
//!
//! Only two operations exist: list everything, append one entry. Nothing is
//! ever updated or deleted.

use std::fmt;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::leaderboard::{LeaderboardEntry, NewEntry},
};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Failure reported by a store backend.
#[derive(Debug)]
pub enum StoreError {
    /// The backend could not be reached or refused the operation.
    Unavailable(String),

    /// The backend answered with data that could not be decoded.
    Corrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
            StoreError::Corrupt(msg) => write!(f, "store returned bad data: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                StoreError::Corrupt(err.to_string())
            }
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    /// Returns every stored entry, in no particular order.
    async fn list(&self) -> Result<Vec<LeaderboardEntry>, StoreError>;

    /// Appends one entry, stamping it with the creation time.
    async fn append(&self, entry: NewEntry) -> Result<LeaderboardEntry, StoreError>;
}
