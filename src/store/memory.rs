// src/store/memory.rs

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{LeaderboardStore, StoreError};
use crate::models::leaderboard::{LeaderboardEntry, NewEntry};

/// Process-local store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<LeaderboardEntry>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail with `StoreError::Unavailable`
    /// until switched back.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LeaderboardStore for MemoryStore {
    async fn list(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        self.check()?;
        Ok(self.entries.read().await.clone())
    }

    async fn append(&self, entry: NewEntry) -> Result<LeaderboardEntry, StoreError> {
        self.check()?;
        let stored = LeaderboardEntry {
            username: entry.username,
            score: entry.score,
            total: entry.total,
            difficulty: entry.difficulty,
            created_at: Some(chrono::Utc::now()),
        };
        self.entries.write().await.push(stored.clone());
        Ok(stored)
    }
}
