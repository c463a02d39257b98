// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Which leaderboard backend the server persists to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub store: StoreKind,
    pub bind_addr: String,
    /// Allowed CORS origins; empty means any origin.
    pub cors_origins: Vec<String>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://trivia.db?mode=rwc".to_string(),
            store: StoreKind::Sqlite,
            bind_addr: "0.0.0.0:3000".to_string(),
            cors_origins: Vec::new(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let store = match env::var("STORE").as_deref() {
            Ok("memory") => StoreKind::Memory,
            _ => StoreKind::Sqlite,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            store,
            bind_addr,
            cors_origins,
            rust_log,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_ones_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:5173, ,http://127.0.0.1:5173 "),
            vec!["http://localhost:5173", "http://127.0.0.1:5173"]
        );
        assert!(parse_origins("").is_empty());
    }
}
