//! String key/value pairs, the terminal counterpart of a browser's local storage.

use rusqlite::{Connection, OptionalExtension, Result};
use std::time::{SystemTime, UNIX_EPOCH};

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn get_item(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM local_storage WHERE key = ?",
        [key],
        |row| row.get(0),
    )
    .optional()
}

pub fn set_item(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        rusqlite::params![key, value, now()],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::run_migrations;

    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_get_missing_item() {
        let conn = open();
        assert_eq!(get_item(&conn, "highScore").unwrap(), None);
    }

    #[test]
    fn test_set_then_overwrite() {
        let conn = open();
        set_item(&conn, "highScore", "3").unwrap();
        assert_eq!(get_item(&conn, "highScore").unwrap().as_deref(), Some("3"));

        set_item(&conn, "highScore", "7").unwrap();
        assert_eq!(get_item(&conn, "highScore").unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn test_persists_across_connections() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("trivia.db");

        {
            let conn = crate::db::init_db(&path).unwrap();
            set_item(&conn, "highScore", "9").unwrap();
        }

        let conn = crate::db::init_db(&path).unwrap();
        assert_eq!(get_item(&conn, "highScore").unwrap().as_deref(), Some("9"));
    }
}
