use std::path::PathBuf;
use std::time::Duration;

use sqlx::sqlite::{SqliteJournalMode, SqliteSynchronous};
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/awareness.db";

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub busy_timeout: Duration,
    pub journal_mode: SqliteJournalMode,
    pub synchronous: SqliteSynchronous,
    pub foreign_keys: bool,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, DbConfigError> {
        let url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        Self::for_url(url)
    }

    pub fn for_url(url: impl Into<String>) -> Result<Self, DbConfigError> {
        let url = url.into();
        if !url.starts_with("sqlite:") {
            return Err(DbConfigError::UnsupportedScheme(url));
        }

        let journal_mode = std::env::var("SQLITE_JOURNAL_MODE")
            .ok()
            .as_deref()
            .and_then(parse_journal_mode)
            .unwrap_or(SqliteJournalMode::Wal);

        let synchronous = std::env::var("SQLITE_SYNCHRONOUS")
            .ok()
            .as_deref()
            .and_then(parse_synchronous)
            .unwrap_or(SqliteSynchronous::Normal);

        Ok(Self {
            url,
            max_connections: env_u32("DB_MAX_CONNECTIONS", 5),
            acquire_timeout: Duration::from_millis(env_u64("DB_ACQUIRE_TIMEOUT_MS", 5000)),
            busy_timeout: Duration::from_millis(env_u64("SQLITE_BUSY_TIMEOUT_MS", 5000)),
            journal_mode,
            synchronous,
            foreign_keys: env_bool("SQLITE_FOREIGN_KEYS", true),
        })
    }

    /// Filesystem location of the database, `None` for in-memory URLs.
    pub fn file_path(&self) -> Option<PathBuf> {
        let raw = self
            .url
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:");
        let raw = raw.split('?').next().unwrap_or(raw);
        if raw.is_empty() || raw == ":memory:" {
            return None;
        }
        Some(PathBuf::from(raw))
    }
}

fn parse_journal_mode(value: &str) -> Option<SqliteJournalMode> {
    match value.to_ascii_uppercase().as_str() {
        "WAL" => Some(SqliteJournalMode::Wal),
        "DELETE" => Some(SqliteJournalMode::Delete),
        "TRUNCATE" => Some(SqliteJournalMode::Truncate),
        "PERSIST" => Some(SqliteJournalMode::Persist),
        "MEMORY" => Some(SqliteJournalMode::Memory),
        "OFF" => Some(SqliteJournalMode::Off),
        _ => None,
    }
}

fn parse_synchronous(value: &str) -> Option<SqliteSynchronous> {
    match value.to_ascii_uppercase().as_str() {
        "OFF" => Some(SqliteSynchronous::Off),
        "NORMAL" => Some(SqliteSynchronous::Normal),
        "FULL" => Some(SqliteSynchronous::Full),
        "EXTRA" => Some(SqliteSynchronous::Extra),
        _ => None,
    }
}

#[derive(Debug, Error)]
pub enum DbConfigError {
    #[error("unsupported database url (only sqlite is supported): {0}")]
    UnsupportedScheme(String),
}

fn env_bool(key: &str, default: bool) -> bool {
    crate::config::env_bool(key).unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_strips_scheme_and_query() {
        let cfg = DbConfig::for_url("sqlite://data/awareness.db?mode=rwc").unwrap();
        assert_eq!(cfg.file_path(), Some(PathBuf::from("data/awareness.db")));

        let memory = DbConfig::for_url("sqlite::memory:").unwrap();
        assert_eq!(memory.file_path(), None);
    }

    #[test]
    fn rejects_other_backends() {
        assert!(DbConfig::for_url("postgres://localhost/db").is_err());
    }
}
