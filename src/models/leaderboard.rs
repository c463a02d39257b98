// src/models/leaderboard.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// One persisted leaderboard record. Entries are append-only.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
    pub total: i64,

    /// Difficulty tier the quiz was played on.
    pub difficulty: String,

    /// Assigned by the store on append.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Entry data handed to the store; the store assigns the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub username: String,
    pub score: i64,
    pub total: i64,
    pub difficulty: String,
}

/// Body of `POST /leaderboard`.
///
/// Every field is optional at the serde level so that a missing field and a
/// JSON `null` both surface as the same 400 rather than a deserializer
/// rejection. Scores are taken on trust: `score <= total` is not checked
/// against the question bank.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required)]
    pub score: Option<u32>,
    #[validate(required, range(min = 1))]
    pub total: Option<u32>,
    #[validate(required, length(min = 1))]
    pub difficulty: Option<String>,
}

impl SubmitScoreRequest {
    /// Converts a validated request into the record to persist.
    ///
    /// Returns `None` when a required field is absent; callers are expected to
    /// have run `validate()` first.
    pub fn into_new_entry(self) -> Option<NewEntry> {
        Some(NewEntry {
            username: self.username?,
            score: i64::from(self.score?),
            total: i64::from(self.total?),
            difficulty: self.difficulty?,
        })
    }
}

/// Body sent by the client at quiz end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreSubmission {
    pub username: String,
    pub score: u32,
    pub total: u32,
    pub difficulty: String,
}
