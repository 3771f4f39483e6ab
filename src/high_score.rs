use crate::db::local_storage::{get_item, set_item};
use crate::logger;
use rusqlite::Connection;

pub const HIGH_SCORE_KEY: &str = "highScore";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Sqlite failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the best-ever score lives. Passed into whoever needs it rather
/// than reached for globally.
pub trait HighScoreStore {
    /// Stored score, 0 when nothing usable is stored.
    fn get(&self) -> u32;
    fn set(&mut self, score: u32);
}

pub struct SqliteHighScoreStore {
    conn: Connection,
}

impl SqliteHighScoreStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    fn read(&self) -> Result<u32, StorageError> {
        match get_item(&self.conn, HIGH_SCORE_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(0),
        }
    }

    fn write(&self, score: u32) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&score)?;
        set_item(&self.conn, HIGH_SCORE_KEY, &raw)?;
        Ok(())
    }
}

impl HighScoreStore for SqliteHighScoreStore {
    fn get(&self) -> u32 {
        self.read().unwrap_or_else(|e| {
            logger::log(&format!("Failed to read high score: {}", e));
            0
        })
    }

    fn set(&mut self, score: u32) {
        if let Err(e) = self.write(score) {
            logger::log(&format!("Failed to write high score {}: {}", score, e));
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryHighScoreStore {
    score: u32,
    pub writes: usize,
}

impl MemoryHighScoreStore {
    pub fn with_score(score: u32) -> Self {
        Self { score, writes: 0 }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn get(&self) -> u32 {
        self.score
    }

    fn set(&mut self, score: u32) {
        self.score = score;
        self.writes += 1;
    }
}
