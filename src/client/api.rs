// src/client/api.rs

use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::models::{
    leaderboard::{LeaderboardEntry, ScoreSubmission},
    question::{Difficulty, Question},
};

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Failure talking to the quiz service.
#[derive(Debug)]
pub enum ClientError {
    /// The service could not be reached at all.
    Transport(String),

    /// The service answered with a non-success status.
    Status(StatusCode),

    /// The response body was not what was expected.
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport error: {}", msg),
            ClientError::Status(status) => write!(f, "HTTP error! status: {}", status.as_u16()),
            ClientError::Decode(msg) => write!(f, "bad response body: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ClientError::Status(status)
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// The three service calls the controller makes.
#[async_trait]
pub trait QuizApi: Send + Sync {
    async fn fetch_questions(&self, difficulty: Difficulty) -> Result<Vec<Question>, ClientError>;

    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ClientError>;

    async fn submit_score(&self, submission: &ScoreSubmission) -> Result<(), ClientError>;
}

/// `QuizApi` over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpQuizApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuizApi {
    /// `base_url` is the service's `/api` root, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpQuizApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn fetch_questions(&self, difficulty: Difficulty) -> Result<Vec<Question>, ClientError> {
        let questions = self
            .client
            .get(format!("{}/questions/{}", self.base_url, difficulty))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Question>>()
            .await?;

        Ok(questions)
    }

    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ClientError> {
        let entries = self
            .client
            .get(format!("{}/leaderboard", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<LeaderboardEntry>>()
            .await?;

        Ok(entries)
    }

    async fn submit_score(&self, submission: &ScoreSubmission) -> Result<(), ClientError> {
        self.client
            .post(format!("{}/leaderboard", self.base_url))
            .json(submission)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let api = HttpQuizApi::new("http://example.test/api/");
        assert_eq!(api.base_url(), "http://example.test/api");
    }

    #[test]
    fn status_error_reads_like_http_error() {
        let err = ClientError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }
}
